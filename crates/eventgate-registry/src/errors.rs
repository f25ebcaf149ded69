use eventgate_identity::Address;
use thiserror::Error;

use crate::oracle::OracleError;

/// Errors that can occur during registry operations.
///
/// Every failure is terminal and leaves the registry unchanged; callers
/// decide whether to retry with corrected input. Front-ends should surface
/// the kind verbatim so a user can tell "you need the credential" from
/// "this event has ended".
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The zero address was supplied where a real identity is required.
    #[error("the zero address is not allowed here")]
    ZeroAddressNotAllowed,
    /// The event id is outside the range of created events.
    #[error("no event with id {event_id}")]
    InvalidEventId {
        /// The offending id.
        event_id: u64,
    },
    /// The caller is not the manager of record for the event.
    #[error("{caller} is not the manager of event {event_id}")]
    NotAManager {
        /// The event whose manager check failed.
        event_id: u64,
        /// The rejected caller.
        caller: Address,
    },
    /// The event has already been ended.
    #[error("event {event_id} has already ended")]
    AlreadyEnded {
        /// The ended event.
        event_id: u64,
    },
    /// The oracle reports the caller holds no unit of the gating collection.
    #[error("{attendee} holds no credential from {collection}")]
    CredentialNotHeld {
        /// The gating collection.
        collection: Address,
        /// The caller lacking the credential.
        attendee: Address,
    },
    /// The caller already holds a registration for the event.
    #[error("{attendee} is already registered for event {event_id}")]
    AlreadyRegistered {
        /// The event in question.
        event_id: u64,
        /// The already-registered caller.
        attendee: Address,
    },
    /// The event is full.
    #[error("event {event_id} is at capacity ({capacity})")]
    CapacityReached {
        /// The full event.
        event_id: u64,
        /// Its capacity at the time of the attempt.
        capacity: u64,
    },
    /// Sign-in attempted without a prior registration.
    #[error("{attendee} is not registered for event {event_id}")]
    NotRegistered {
        /// The event in question.
        event_id: u64,
        /// The unregistered caller.
        attendee: Address,
    },
    /// The attendee has already signed in for the event.
    #[error("{attendee} has already signed in for event {event_id}")]
    AlreadyCheckedIn {
        /// The event in question.
        event_id: u64,
        /// The already-checked-in attendee.
        attendee: Address,
    },
    /// The ownership oracle query itself failed.
    #[error("ownership oracle failure: {0}")]
    Oracle(#[from] OracleError),
}
