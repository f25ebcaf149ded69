use thiserror::Error;

/// Errors that can occur during journal operations.
#[derive(Error, Debug)]
pub enum JournalError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid or unsupported header line.
    #[error("invalid journal header: {0}")]
    InvalidHeader(String),
    /// The file exists but has no header line.
    #[error("missing journal header")]
    MissingHeader,
    /// JSON serialization failure while writing.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A torn or garbled record line, in strict mode.
    #[error("corrupt record at line {line}: {reason}")]
    CorruptRecord {
        /// 1-based line number in the file.
        line: u64,
        /// Why the line could not be decoded.
        reason: String,
    },
    /// Sequence numbers are not contiguous, in strict mode.
    #[error("sequence gap at line {line}: expected {expected}, found {found}")]
    SequenceGap {
        /// 1-based line number in the file.
        line: u64,
        /// Sequence number the reader expected.
        expected: u64,
        /// Sequence number found on the line.
        found: u64,
    },
}
