//! Journal writer implementation.

use crate::envelope::{JournalHeader, RecordEnvelope};
use crate::errors::JournalError;
use eventgate_identity::Timestamp;
use eventgate_registry::RegistryRecord;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Seek, Write};
use std::path::Path;

/// Options for journal writing.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Whether to fsync after each append (default: false).
    pub sync: bool,
    /// Whether to create the file if it doesn't exist (default: true).
    pub create: bool,
    /// Whether to append to an existing file (default: true).
    pub append: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            sync: false,
            create: true,
            append: true,
        }
    }
}

/// Appends registry records to a journal file.
///
/// The journal is a line-oriented file: a header line followed by one
/// [`RecordEnvelope`] JSON document per line. Opening an existing file
/// validates the header, recovers the last good sequence number, and drops
/// a torn trailing line so a crashed append can never corrupt later
/// records.
#[derive(Debug)]
pub struct JournalWriter {
    file: File,
    sync: bool,
    next_seq: u64,
}

impl JournalWriter {
    /// Opens or creates a journal file for writing.
    ///
    /// An empty file receives a header line. An existing file is scanned
    /// for its last intact record; with `options.append` the writer
    /// continues the sequence after it, otherwise the file is truncated
    /// back to the header and the sequence restarts at 1.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError`] if the file cannot be opened or created,
    /// or if an existing file has a missing or invalid header line.
    pub fn open<P: AsRef<Path>>(path: P, options: WriteOptions) -> Result<Self, JournalError> {
        let file = OpenOptions::new()
            .create(options.create)
            .read(true)
            .write(true)
            .open(path)?;

        let mut writer = Self {
            file,
            sync: options.sync,
            next_seq: 1,
        };

        let metadata = writer.file.metadata()?;
        if metadata.len() == 0 {
            writer.write_header()?;
        } else {
            let scan = writer.scan_existing()?;
            if options.append {
                writer.file.set_len(scan.intact_len)?;
                writer.next_seq = scan.last_seq + 1;
            } else {
                writer.file.set_len(scan.header_len)?;
                writer.next_seq = 1;
            }
            writer.file.seek(io::SeekFrom::End(0))?;
        }

        Ok(writer)
    }

    fn write_header(&mut self) -> Result<(), JournalError> {
        let mut line = serde_json::to_string(&JournalHeader::new())?;
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;
        if self.sync {
            self.file.sync_all()?;
        }
        Ok(())
    }

    fn scan_existing(&mut self) -> Result<ScanResult, JournalError> {
        self.file.seek(io::SeekFrom::Start(0))?;
        let mut reader = BufReader::new(&mut self.file);

        let mut line = String::new();
        let header_bytes = reader.read_line(&mut line)?;
        if header_bytes == 0 || !line.ends_with('\n') {
            return Err(JournalError::MissingHeader);
        }
        let header: JournalHeader = serde_json::from_str(line.trim_end())
            .map_err(|e| JournalError::InvalidHeader(e.to_string()))?;
        header.validate()?;

        let header_len = header_bytes as u64;
        let mut intact_len = header_len;
        let mut last_seq = 0;
        loop {
            line.clear();
            let n = reader.read_line(&mut line)?;
            if n == 0 {
                break;
            }
            if !line.ends_with('\n') {
                break;
            }
            match serde_json::from_str::<RecordEnvelope>(line.trim_end()) {
                Ok(envelope) => {
                    last_seq = envelope.seq;
                    intact_len += n as u64;
                }
                Err(_) => break,
            }
        }

        Ok(ScanResult {
            header_len,
            intact_len,
            last_seq,
        })
    }

    /// Appends a record, assigning it the next sequence number.
    ///
    /// Returns the envelope exactly as written.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError`] if serialization or the underlying write
    /// fails.
    pub fn append_record(
        &mut self,
        record: RegistryRecord,
        recorded_at: Timestamp,
    ) -> Result<RecordEnvelope, JournalError> {
        let envelope = RecordEnvelope {
            seq: self.next_seq,
            recorded_at,
            record,
        };

        let mut line = serde_json::to_string(&envelope)?;
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;
        if self.sync {
            self.file.sync_all()?;
        }

        self.next_seq += 1;
        Ok(envelope)
    }

    /// Sequence number the next appended record will receive.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    /// Finishes writing and closes the file.
    pub fn finish(mut self) -> Result<(), JournalError> {
        self.file.flush()?;
        if self.sync {
            self.file.sync_all()?;
        }
        Ok(())
    }
}

impl Drop for JournalWriter {
    fn drop(&mut self) {
        let _ = self.file.flush();
        if self.sync {
            let _ = self.file.sync_all();
        }
    }
}

struct ScanResult {
    header_len: u64,
    intact_len: u64,
    last_seq: u64,
}
