//! Output formatting utilities.

use eventgate_journal::RecordEnvelope;
use eventgate_registry::{Event, RegistryRecord, UNBOUNDED_CAPACITY};

/// Formats an event as a fixed-width table row.
pub fn format_event_row(event: &Event) -> String {
    format!(
        "{:<6} {:<28} {:<8} {:<11} {:>10} {:>10}",
        event.id,
        truncate(&event.name, 28),
        event.status,
        event.category,
        event.registered_count,
        format_capacity(event.capacity),
    )
}

/// Prints the event table header.
pub fn print_event_header() {
    println!(
        "{:<6} {:<28} {:<8} {:<11} {:>10} {:>10}",
        "ID", "NAME", "STATUS", "CATEGORY", "REGISTERED", "CAPACITY"
    );
    println!("{}", "-".repeat(80));
}

/// Formats a journal envelope as a table row.
pub fn format_log_row(envelope: &RecordEnvelope) -> String {
    let (kind, detail) = match &envelope.record {
        RegistryRecord::EventCreated(r) => (
            "created",
            format!("event {} \"{}\" by {}", r.event_id, r.name, r.manager),
        ),
        RegistryRecord::EventUpdated(r) => (
            "updated",
            format!("event {} \"{}\" by {}", r.event_id, r.name, r.manager),
        ),
        RegistryRecord::EventEnded(r) => (
            "ended",
            format!("event {} \"{}\" by {}", r.event_id, r.name, r.manager),
        ),
        RegistryRecord::UserRegistered(r) => (
            "registered",
            format!("{} for event {} ({})", r.attendee, r.event_id, r.event_name),
        ),
        RegistryRecord::UserSignedIn(r) => (
            "signed-in",
            format!("{} for event {}", r.attendee, r.event_id),
        ),
    };
    format!(
        "{:<5} {:<21} {:<11} {}",
        envelope.seq, envelope.recorded_at, kind, detail
    )
}

/// Prints the journal table header.
pub fn print_log_header() {
    println!("{:<5} {:<21} {:<11} {}", "SEQ", "RECORDED_AT", "KIND", "DETAIL");
    println!("{}", "-".repeat(100));
}

fn format_capacity(capacity: u64) -> String {
    if capacity == UNBOUNDED_CAPACITY {
        "-".to_string()
    } else {
        capacity.to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
