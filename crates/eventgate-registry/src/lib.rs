//! Event registry state machine for access-gated events.
//!
//! This crate provides:
//! - [`Event`] and [`Registration`] records with closed category and status enums
//! - [`EventRegistry`], the owned aggregate enforcing every transition rule
//! - [`OwnershipOracle`], the injected credential-ownership capability
//! - Typed records emitted exactly once per successful mutating call
//!
//! Core invariants:
//! - Event ids are assigned sequentially from 1; 0 is never a valid id
//! - `registered_count` never exceeds capacity and never decrements
//! - `Ended` is terminal; no transition leaves it
//! - A failed operation changes nothing and emits nothing
//! - The ownership oracle is queried fresh on every gated operation and is
//!   the last gate before mutation

#![deny(missing_docs)]

/// Error types for registry operations.
pub mod errors;
/// Event record and its category and status enums.
pub mod event;
/// Ownership oracle trait and reference implementation.
pub mod oracle;
/// Records emitted by successful mutating operations.
pub mod records;
/// Registration record.
pub mod registration;
/// The registry aggregate.
pub mod registry;

pub use errors::RegistryError;
pub use event::{Category, Event, EventStatus, UNBOUNDED_CAPACITY};
pub use oracle::{MemoryOracle, OracleError, OwnershipOracle};
pub use records::{
    EventCreated, EventEnded, EventUpdated, RegistryRecord, UserRegistered, UserSignedIn,
};
pub use registration::Registration;
pub use registry::{EventRegistry, RegistryState};
