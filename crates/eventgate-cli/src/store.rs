//! Snapshot, holdings, and journal file plumbing shared by commands.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use eventgate_identity::Timestamp;
use eventgate_journal::{JournalError, JournalWriter, WriteOptions};
use eventgate_registry::{MemoryOracle, RegistryRecord, RegistryState};
use thiserror::Error;

/// Errors from the CLI's file plumbing.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure on a snapshot or holdings file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A snapshot or holdings file holds malformed JSON.
    #[error("malformed file {path}: {source}")]
    Malformed {
        /// The offending file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Journal append failed.
    #[error(transparent)]
    Journal(#[from] JournalError),
    /// The system clock produced an unusable timestamp.
    #[error("bad timestamp: {0}")]
    Timestamp(#[from] eventgate_identity::ValidationError),
}

/// Locations of the three files a command operates on.
pub struct StorePaths {
    /// Registry snapshot.
    pub state: PathBuf,
    /// Record journal.
    pub journal: PathBuf,
    /// Credential holdings fixture.
    pub holdings: PathBuf,
}

impl StorePaths {
    /// Builds paths from the CLI's global options.
    pub fn new(state: &str, journal: &str, holdings: &str) -> Self {
        Self {
            state: PathBuf::from(state),
            journal: PathBuf::from(journal),
            holdings: PathBuf::from(holdings),
        }
    }
}

/// Loads the registry snapshot, defaulting to empty when the file does not
/// exist yet.
pub fn load_state(path: &Path) -> Result<RegistryState, StoreError> {
    if !path.exists() {
        return Ok(RegistryState::default());
    }
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Persists the registry snapshot via a temp-file swap.
pub fn save_state(path: &Path, state: &RegistryState) -> Result<(), StoreError> {
    let data = serde_json::to_string_pretty(state)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads the holdings fixture, defaulting to empty when the file does not
/// exist yet.
pub fn load_holdings(path: &Path) -> Result<MemoryOracle, StoreError> {
    if !path.exists() {
        return Ok(MemoryOracle::new());
    }
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Persists the holdings fixture.
pub fn save_holdings(path: &Path, oracle: &MemoryOracle) -> Result<(), StoreError> {
    let data = serde_json::to_string_pretty(oracle)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Appends one emitted record to the journal, stamped with the current
/// time.
pub fn append_record(path: &Path, record: RegistryRecord) -> Result<(), StoreError> {
    let mut writer = JournalWriter::open(path, WriteOptions::default())?;
    writer.append_record(record, now()?)?;
    writer.finish()?;
    Ok(())
}

fn now() -> Result<Timestamp, StoreError> {
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    Ok(Timestamp::parse(stamp)?)
}
