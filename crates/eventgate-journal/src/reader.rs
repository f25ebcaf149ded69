//! Journal reader implementation.

use crate::envelope::{JournalHeader, RecordEnvelope};
use crate::errors::JournalError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read mode for handling a damaged tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Strict mode: torn or garbled records and sequence gaps are errors.
    Strict,
    /// Permissive mode: the first damaged record is treated as end-of-file.
    Permissive,
}

/// Streams record envelopes out of a journal file.
#[derive(Debug)]
pub struct JournalReader {
    reader: BufReader<File>,
    mode: ReadMode,
    line: u64,
    next_seq: u64,
    done: bool,
}

impl JournalReader {
    /// Opens a journal file for reading.
    ///
    /// The header line is validated and the reader is positioned at the
    /// first record line.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError`] if the file cannot be opened, is empty, or
    /// carries an invalid header line.
    pub fn open<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Self, JournalError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut line = String::new();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            return Err(JournalError::MissingHeader);
        }
        let header: JournalHeader = serde_json::from_str(line.trim_end())
            .map_err(|e| JournalError::InvalidHeader(e.to_string()))?;
        header.validate()?;

        Ok(Self {
            reader,
            mode,
            line: 1,
            next_seq: 1,
            done: false,
        })
    }

    /// Reads the next record envelope.
    ///
    /// Returns `Ok(None)` at end-of-file, or at the first damaged record
    /// in permissive mode.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`JournalError::CorruptRecord`] for a torn
    /// or garbled line and [`JournalError::SequenceGap`] when sequence
    /// numbers are not contiguous.
    pub fn read_record(&mut self) -> Result<Option<RecordEnvelope>, JournalError> {
        if self.done {
            return Ok(None);
        }

        let mut buf = String::new();
        let n = self.reader.read_line(&mut buf)?;
        if n == 0 {
            self.done = true;
            return Ok(None);
        }
        self.line += 1;

        if !buf.ends_with('\n') {
            return self.damaged("truncated line");
        }
        let envelope: RecordEnvelope = match serde_json::from_str(buf.trim_end()) {
            Ok(envelope) => envelope,
            Err(e) => return self.damaged(&e.to_string()),
        };

        if self.mode == ReadMode::Strict && envelope.seq != self.next_seq {
            return Err(JournalError::SequenceGap {
                line: self.line,
                expected: self.next_seq,
                found: envelope.seq,
            });
        }

        self.next_seq = envelope.seq + 1;
        Ok(Some(envelope))
    }

    /// Reads all remaining records.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`read_record`](Self::read_record).
    pub fn read_all(&mut self) -> Result<Vec<RecordEnvelope>, JournalError> {
        let mut records = Vec::new();
        while let Some(envelope) = self.read_record()? {
            records.push(envelope);
        }
        Ok(records)
    }

    fn damaged(&mut self, reason: &str) -> Result<Option<RecordEnvelope>, JournalError> {
        match self.mode {
            ReadMode::Permissive => {
                self.done = true;
                Ok(None)
            }
            ReadMode::Strict => Err(JournalError::CorruptRecord {
                line: self.line,
                reason: reason.to_string(),
            }),
        }
    }
}
