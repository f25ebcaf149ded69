use eventgate_identity::{Address, Timestamp};
use eventgate_journal::{JournalError, JournalReader, JournalWriter, ReadMode, WriteOptions};
use eventgate_registry::{EventCreated, RegistryRecord, UserRegistered};
use std::fs;
use std::io::Write;
use tempfile::TempDir;

fn addr(tail: u64) -> Address {
    Address::parse(format!("0x{:040x}", tail)).unwrap()
}

fn ts() -> Timestamp {
    Timestamp::parse("2025-06-01T12:00:00Z").unwrap()
}

fn created(event_id: u64) -> RegistryRecord {
    RegistryRecord::EventCreated(EventCreated {
        event_id,
        name: format!("Event {event_id}"),
        manager: addr(0xa1),
        credential_collection: addr(0xc0ffee),
    })
}

fn registered(event_id: u64, attendee: u64) -> RegistryRecord {
    RegistryRecord::UserRegistered(UserRegistered {
        event_id,
        attendee: addr(attendee),
        event_name: format!("Event {event_id}"),
    })
}

#[test]
fn test_write_read_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.journal");

    {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        writer.append_record(created(1), ts()).unwrap();
        writer.append_record(registered(1, 0x11), ts()).unwrap();
        writer.finish().unwrap();
    }

    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    let records = reader.read_all().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].seq, 1);
    assert_eq!(records[0].record, created(1));
    assert_eq!(records[1].seq, 2);
    assert_eq!(records[1].record, registered(1, 0x11));
}

#[test]
fn test_append_to_existing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.journal");

    {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        writer.append_record(created(1), ts()).unwrap();
        writer.finish().unwrap();
    }

    {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        assert_eq!(writer.next_seq(), 2);
        writer.append_record(registered(1, 0x11), ts()).unwrap();
        writer.finish().unwrap();
    }

    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    let records = reader.read_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].seq, 2);
}

#[test]
fn test_truncate_mode_restarts_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.journal");

    {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        writer.append_record(created(1), ts()).unwrap();
        writer.finish().unwrap();
    }

    let options = WriteOptions {
        append: false,
        ..WriteOptions::default()
    };
    {
        let mut writer = JournalWriter::open(&path, options).unwrap();
        assert_eq!(writer.next_seq(), 1);
        writer.append_record(created(2), ts()).unwrap();
        writer.finish().unwrap();
    }

    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    let records = reader.read_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record, created(2));
}

#[test]
fn test_sync_option() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.journal");

    let options = WriteOptions {
        sync: true,
        ..WriteOptions::default()
    };
    let mut writer = JournalWriter::open(&path, options).unwrap();
    writer.append_record(created(1), ts()).unwrap();
    writer.finish().unwrap();

    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    assert_eq!(reader.read_all().unwrap().len(), 1);
}

#[test]
fn test_truncated_tail_permissive_vs_strict() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.journal");

    {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        writer.append_record(created(1), ts()).unwrap();
        writer.append_record(registered(1, 0x11), ts()).unwrap();
        writer.finish().unwrap();
    }

    // Cut into the last line to simulate a torn append.
    let len = fs::metadata(&path).unwrap().len();
    let file = fs::OpenOptions::new().write(true).open(&path).unwrap();
    file.set_len(len - 20).unwrap();

    let mut permissive = JournalReader::open(&path, ReadMode::Permissive).unwrap();
    let records = permissive.read_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].seq, 1);

    let mut strict = JournalReader::open(&path, ReadMode::Strict).unwrap();
    assert!(strict.read_record().unwrap().is_some());
    let err = strict.read_record().unwrap_err();
    assert!(matches!(err, JournalError::CorruptRecord { .. }));
}

#[test]
fn test_reopen_repairs_torn_tail() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.journal");

    {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        writer.append_record(created(1), ts()).unwrap();
        writer.append_record(registered(1, 0x11), ts()).unwrap();
        writer.finish().unwrap();
    }

    let len = fs::metadata(&path).unwrap().len();
    let file = fs::OpenOptions::new().write(true).open(&path).unwrap();
    file.set_len(len - 20).unwrap();

    {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        assert_eq!(writer.next_seq(), 2);
        writer.append_record(registered(1, 0x22), ts()).unwrap();
        writer.finish().unwrap();
    }

    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    let records = reader.read_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].seq, 2);
    assert_eq!(records[1].record, registered(1, 0x22));
}

#[test]
fn test_rejects_garbage_header() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.journal");
    fs::write(&path, "not a journal\n").unwrap();

    let err = JournalReader::open(&path, ReadMode::Permissive).unwrap_err();
    assert!(matches!(err, JournalError::InvalidHeader(_)));

    let err = JournalWriter::open(&path, WriteOptions::default()).unwrap_err();
    assert!(matches!(err, JournalError::InvalidHeader(_)));
}

#[test]
fn test_strict_reader_detects_sequence_gap() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.journal");

    {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        writer.append_record(created(1), ts()).unwrap();
        writer.finish().unwrap();
    }

    // Hand-append an envelope that skips a sequence number.
    let mut file = fs::OpenOptions::new().append(true).open(&path).unwrap();
    let rogue = serde_json::json!({
        "seq": 3,
        "recorded_at": "2025-06-01T12:00:00Z",
        "record": {
            "record_type": "event_ended",
            "event_id": 1,
            "name": "Event 1",
            "manager": "0x00000000000000000000000000000000000000a1"
        }
    });
    writeln!(file, "{rogue}").unwrap();

    let mut strict = JournalReader::open(&path, ReadMode::Strict).unwrap();
    assert!(strict.read_record().unwrap().is_some());
    let err = strict.read_record().unwrap_err();
    assert!(matches!(
        err,
        JournalError::SequenceGap {
            expected: 2,
            found: 3,
            ..
        }
    ));

    let mut permissive = JournalReader::open(&path, ReadMode::Permissive).unwrap();
    assert_eq!(permissive.read_all().unwrap().len(), 2);
}
