//! Append-only journal for eventgate registry records.
//!
//! This crate provides:
//! - Line-oriented, append-only storage for emitted registry records
//! - Writer and reader APIs with strict and permissive modes
//! - Torn-tail recovery on reopen, so a crashed append never hides
//!   earlier records
//!
//! Every successful mutating operation on the registry emits exactly one
//! record; this journal persists that stream so consumers (CLI, indexers)
//! can replay committed history.
//!
//! ## Quick Start
//!
//! ```rust
//! use eventgate_identity::{Address, Timestamp};
//! use eventgate_journal::{JournalReader, JournalWriter, ReadMode, WriteOptions};
//! use eventgate_registry::{EventEnded, RegistryRecord};
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("events.journal");
//!
//! let record = RegistryRecord::EventEnded(EventEnded {
//!     event_id: 1,
//!     name: "Devfest Lagos 2024".to_string(),
//!     manager: Address::parse("0x66664cbab1d5cf6b0c85dbcc71829812e27f7f4c")?,
//! });
//!
//! let mut writer = JournalWriter::open(&path, WriteOptions::default())?;
//! writer.append_record(record, Timestamp::parse("2025-06-01T12:00:00Z")?)?;
//! writer.finish()?;
//!
//! let mut reader = JournalReader::open(&path, ReadMode::Strict)?;
//! while let Some(envelope) = reader.read_record()? {
//!     println!("{}: {:?}", envelope.seq, envelope.record);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

/// Header and envelope structures for the line format.
pub mod envelope;
/// Error types for journal operations.
pub mod errors;
/// Journal reader implementation.
pub mod reader;
/// Journal writer implementation.
pub mod writer;

pub use envelope::{JournalHeader, RecordEnvelope, MAGIC, VERSION};
pub use errors::JournalError;
pub use reader::{JournalReader, ReadMode};
pub use writer::{JournalWriter, WriteOptions};
