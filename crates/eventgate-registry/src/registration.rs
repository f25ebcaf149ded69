use serde::{Deserialize, Serialize};

/// A user's enrollment in a specific event.
///
/// Registrations are keyed by `(event id, attendee address)` inside the
/// registry and are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Name supplied by the attendee at registration time; stored once.
    pub display_name: String,
    /// Set by a successful sign-in, never reset.
    pub checked_in: bool,
}
