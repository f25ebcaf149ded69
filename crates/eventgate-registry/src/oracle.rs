use eventgate_identity::Address;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Errors raised by an ownership oracle adapter.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle backend could not be reached or returned malformed data.
    #[error("oracle unavailable: {reason}")]
    Unavailable {
        /// Why the query failed.
        reason: String,
    },
}

/// Answers whether an identity holds at least one unit of a credential
/// collection.
///
/// The registry queries an implementation fresh on every gated operation;
/// answers are never cached. A query that fails aborts the operation with
/// no state change.
pub trait OwnershipOracle {
    /// Returns `true` if `identity` holds at least one unit of `collection`.
    fn holds_credential(
        &self,
        collection: &Address,
        identity: &Address,
    ) -> Result<bool, OracleError>;
}

/// In-memory holdings map: the reference oracle for tests and local
/// fixtures.
///
/// Serializable so a front-end can persist it as a stand-in for the real
/// credential contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryOracle {
    holdings: BTreeMap<Address, BTreeSet<Address>>,
}

impl MemoryOracle {
    /// Creates an oracle with no holdings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `holder` owns a unit of `collection`.
    pub fn grant(&mut self, collection: Address, holder: Address) {
        self.holdings.entry(collection).or_default().insert(holder);
    }

    /// Removes `holder`'s unit of `collection`, if any.
    pub fn revoke(&mut self, collection: &Address, holder: &Address) {
        if let Some(holders) = self.holdings.get_mut(collection) {
            holders.remove(holder);
        }
    }
}

impl OwnershipOracle for MemoryOracle {
    fn holds_credential(
        &self,
        collection: &Address,
        identity: &Address,
    ) -> Result<bool, OracleError> {
        Ok(self
            .holdings
            .get(collection)
            .map_or(false, |holders| holders.contains(identity)))
    }
}
