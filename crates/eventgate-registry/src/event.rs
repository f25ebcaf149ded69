use eventgate_identity::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capacity assigned to events created without an explicit limit.
///
/// Registration compares against this like any other capacity, so an
/// event created without a limit is effectively unbounded.
pub const UNBOUNDED_CAPACITY: u64 = u64::MAX;

/// Audience category for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Open listing; anyone holding the gating credential may register.
    Public,
    /// Unlisted; the manager shares the event id out of band.
    Restricted,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Restricted => write!(f, "restricted"),
        }
    }
}

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Accepting registrations and sign-ins.
    Active,
    /// Ended by the manager. Terminal.
    Ended,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Ended => write!(f, "ended"),
        }
    }
}

/// A gated event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Sequential id, assigned from 1 upward; 0 is never valid.
    pub id: u64,
    /// Creator of the event; the only identity allowed to update or end it.
    pub manager: Address,
    /// Collection whose ownership gates registration. Never the zero address.
    pub credential_collection: Address,
    /// Display name.
    pub name: String,
    /// Audience category.
    pub category: Category,
    /// Maximum simultaneous registrations; [`UNBOUNDED_CAPACITY`] when unset.
    pub capacity: u64,
    /// Number of successful registrations; never decremented.
    pub registered_count: u64,
    /// Lifecycle status.
    pub status: EventStatus,
}

impl Event {
    /// Returns `true` if another registration fits under the capacity.
    pub fn has_room(&self) -> bool {
        self.registered_count < self.capacity
    }

    /// Returns `true` while the event accepts registrations and sign-ins.
    pub fn is_active(&self) -> bool {
        self.status == EventStatus::Active
    }
}
