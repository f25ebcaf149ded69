use eventgate_identity::Address;
use serde::{Deserialize, Serialize};

/// Emitted on successful event creation.
///
/// Carries the assigned id alongside the creation payload, so the record
/// doubles as the operation's return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCreated {
    /// Id assigned to the new event.
    pub event_id: u64,
    /// Event name at creation.
    pub name: String,
    /// The creator, installed as manager of record.
    pub manager: Address,
    /// Collection gating registration.
    pub credential_collection: Address,
}

/// Emitted on successful event update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUpdated {
    /// The updated event.
    pub event_id: u64,
    /// Event name after the update.
    pub name: String,
    /// Manager of record (unchanged by updates).
    pub manager: Address,
    /// Collection gating registration after the update.
    pub credential_collection: Address,
}

/// Emitted when a manager ends an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnded {
    /// The ended event.
    pub event_id: u64,
    /// Event name at the time it ended.
    pub name: String,
    /// Manager who ended it.
    pub manager: Address,
}

/// Emitted on successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRegistered {
    /// The event registered for.
    pub event_id: u64,
    /// The registered identity.
    pub attendee: Address,
    /// Event name at registration time.
    pub event_name: String,
}

/// Emitted on successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSignedIn {
    /// The event signed in for.
    pub event_id: u64,
    /// The attendee who signed in.
    pub attendee: Address,
}

/// Tagged union of every record the registry can emit.
///
/// Exactly one record is emitted per successful mutating call and none on
/// failure; consumers (journal, indexer, UI) rely on this stream for state
/// reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "record_type", rename_all = "snake_case")]
pub enum RegistryRecord {
    /// See [`EventCreated`].
    EventCreated(EventCreated),
    /// See [`EventUpdated`].
    EventUpdated(EventUpdated),
    /// See [`EventEnded`].
    EventEnded(EventEnded),
    /// See [`UserRegistered`].
    UserRegistered(UserRegistered),
    /// See [`UserSignedIn`].
    UserSignedIn(UserSignedIn),
}

impl From<EventCreated> for RegistryRecord {
    fn from(record: EventCreated) -> Self {
        Self::EventCreated(record)
    }
}

impl From<EventUpdated> for RegistryRecord {
    fn from(record: EventUpdated) -> Self {
        Self::EventUpdated(record)
    }
}

impl From<EventEnded> for RegistryRecord {
    fn from(record: EventEnded) -> Self {
        Self::EventEnded(record)
    }
}

impl From<UserRegistered> for RegistryRecord {
    fn from(record: UserRegistered) -> Self {
        Self::UserRegistered(record)
    }
}

impl From<UserSignedIn> for RegistryRecord {
    fn from(record: UserSignedIn) -> Self {
        Self::UserSignedIn(record)
    }
}
