//! Header and envelope structures for the journal line format.

use eventgate_identity::Timestamp;
use eventgate_registry::RegistryRecord;
use serde::{Deserialize, Serialize};

use crate::errors::JournalError;

/// Journal magic string, carried in the header line.
pub const MAGIC: &str = "EGJ1";

/// Current journal format version.
pub const VERSION: u32 = 1;

/// First line of every journal file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalHeader {
    /// Magic string: `"EGJ1"`.
    pub magic: String,
    /// Format version.
    pub version: u32,
}

impl JournalHeader {
    /// Creates a header with the current magic and version.
    pub fn new() -> Self {
        Self {
            magic: MAGIC.to_string(),
            version: VERSION,
        }
    }

    /// Validates magic and version.
    pub fn validate(&self) -> Result<(), JournalError> {
        if self.magic != MAGIC {
            return Err(JournalError::InvalidHeader(format!(
                "invalid magic: {:?}, expected {:?}",
                self.magic, MAGIC
            )));
        }
        if self.version != VERSION {
            return Err(JournalError::InvalidHeader(format!(
                "unsupported version: {}",
                self.version
            )));
        }
        Ok(())
    }
}

impl Default for JournalHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// One journal line: a registry record with its position and write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEnvelope {
    /// 1-based, contiguous sequence number.
    pub seq: u64,
    /// When the record was appended.
    pub recorded_at: Timestamp,
    /// The emitted registry record.
    pub record: RegistryRecord,
}
