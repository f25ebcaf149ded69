//! The registry aggregate: owns all event and registration state and
//! enforces the transition rules.

use eventgate_identity::Address;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::errors::RegistryError;
use crate::event::{Category, Event, EventStatus, UNBOUNDED_CAPACITY};
use crate::oracle::OwnershipOracle;
use crate::records::{EventCreated, EventEnded, EventUpdated, UserRegistered, UserSignedIn};
use crate::registration::Registration;

/// Serializable registry state, detached from the oracle.
///
/// Captures events, registrations, and counters so a front-end can persist
/// a registry and rehydrate it later around a freshly injected oracle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryState {
    events: BTreeMap<u64, Event>,
    registrations: BTreeMap<u64, BTreeMap<Address, Registration>>,
    known_registrants: BTreeSet<Address>,
    event_count: u64,
}

/// The event registry.
///
/// Holds an injected [`OwnershipOracle`] and queries it fresh on every
/// gated operation. Every mutating operation takes the caller identity
/// explicitly, validates its preconditions in a fixed order, and either
/// commits fully and returns the emitted record, or fails with a
/// [`RegistryError`] and no state change.
#[derive(Debug)]
pub struct EventRegistry<O> {
    oracle: O,
    state: RegistryState,
}

impl<O: OwnershipOracle> EventRegistry<O> {
    /// Creates an empty registry around the given oracle.
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            state: RegistryState::default(),
        }
    }

    /// Rebuilds a registry from a previously captured state snapshot.
    pub fn from_state(oracle: O, state: RegistryState) -> Self {
        Self { oracle, state }
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    /// Consumes the registry and returns the state snapshot.
    pub fn into_state(self) -> RegistryState {
        self.state
    }

    /// Creates a new event and returns its creation record.
    ///
    /// The caller becomes the manager of record. Capacity defaults to
    /// [`UNBOUNDED_CAPACITY`] when `capacity` is `None` or zero.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ZeroAddressNotAllowed`] if the caller or the
    /// credential collection is the zero address; `event_count` is
    /// unchanged on failure.
    pub fn create_event(
        &mut self,
        caller: &Address,
        credential_collection: Address,
        name: impl Into<String>,
        category: Category,
        capacity: Option<u64>,
    ) -> Result<EventCreated, RegistryError> {
        if caller.is_zero() || credential_collection.is_zero() {
            return Err(RegistryError::ZeroAddressNotAllowed);
        }

        let event_id = self.state.event_count + 1;
        let name = name.into();
        let event = Event {
            id: event_id,
            manager: caller.clone(),
            credential_collection: credential_collection.clone(),
            name: name.clone(),
            category,
            capacity: capacity.filter(|&c| c > 0).unwrap_or(UNBOUNDED_CAPACITY),
            registered_count: 0,
            status: EventStatus::Active,
        };
        self.state.events.insert(event_id, event);
        self.state.event_count = event_id;

        Ok(EventCreated {
            event_id,
            name,
            manager: caller.clone(),
            credential_collection,
        })
    }

    /// Overwrites the mutable fields of an existing event.
    ///
    /// Only the manager of record may update. `registered_count` and
    /// `status` are untouched; capacity is overwritten only when supplied
    /// and positive, so an update never silently un-bounds a capped event.
    ///
    /// # Errors
    ///
    /// In order: [`RegistryError::InvalidEventId`],
    /// [`RegistryError::ZeroAddressNotAllowed`],
    /// [`RegistryError::NotAManager`].
    pub fn update_event(
        &mut self,
        caller: &Address,
        event_id: u64,
        credential_collection: Address,
        name: impl Into<String>,
        category: Category,
        capacity: Option<u64>,
    ) -> Result<EventUpdated, RegistryError> {
        let Some(event) = self.state.events.get_mut(&event_id) else {
            return Err(RegistryError::InvalidEventId { event_id });
        };
        if credential_collection.is_zero() {
            return Err(RegistryError::ZeroAddressNotAllowed);
        }
        if event.manager != *caller {
            return Err(RegistryError::NotAManager {
                event_id,
                caller: caller.clone(),
            });
        }

        event.credential_collection = credential_collection.clone();
        event.name = name.into();
        event.category = category;
        if let Some(limit) = capacity.filter(|&c| c > 0) {
            event.capacity = limit;
        }

        Ok(EventUpdated {
            event_id,
            name: event.name.clone(),
            manager: event.manager.clone(),
            credential_collection,
        })
    }

    /// Ends an event. Terminal: a second call fails rather than no-ops.
    ///
    /// # Errors
    ///
    /// In order: [`RegistryError::InvalidEventId`],
    /// [`RegistryError::NotAManager`], [`RegistryError::AlreadyEnded`].
    pub fn end_event(
        &mut self,
        caller: &Address,
        event_id: u64,
    ) -> Result<EventEnded, RegistryError> {
        let Some(event) = self.state.events.get_mut(&event_id) else {
            return Err(RegistryError::InvalidEventId { event_id });
        };
        if event.manager != *caller {
            return Err(RegistryError::NotAManager {
                event_id,
                caller: caller.clone(),
            });
        }
        if event.status == EventStatus::Ended {
            return Err(RegistryError::AlreadyEnded { event_id });
        }

        event.status = EventStatus::Ended;

        Ok(EventEnded {
            event_id,
            name: event.name.clone(),
            manager: event.manager.clone(),
        })
    }

    /// Registers the caller for an event.
    ///
    /// Preconditions are checked in a fixed order, first failure wins:
    /// valid id, event still active, caller not already registered, room
    /// under capacity, and finally a fresh ownership query against the
    /// gating collection. The oracle is the last gate; nothing is mutated
    /// before it passes, so a failing or re-entering oracle call can never
    /// observe partial state.
    ///
    /// A first-ever registration by this identity, across all events, also
    /// increments the unique-user counter.
    ///
    /// # Errors
    ///
    /// In order: [`RegistryError::InvalidEventId`],
    /// [`RegistryError::AlreadyEnded`],
    /// [`RegistryError::AlreadyRegistered`],
    /// [`RegistryError::CapacityReached`],
    /// [`RegistryError::CredentialNotHeld`], or
    /// [`RegistryError::Oracle`] if the query itself fails.
    pub fn register_for_event(
        &mut self,
        caller: &Address,
        event_id: u64,
        display_name: impl Into<String>,
    ) -> Result<UserRegistered, RegistryError> {
        let Some(event) = self.state.events.get(&event_id) else {
            return Err(RegistryError::InvalidEventId { event_id });
        };
        if event.status == EventStatus::Ended {
            return Err(RegistryError::AlreadyEnded { event_id });
        }
        if self
            .state
            .registrations
            .get(&event_id)
            .map_or(false, |per_event| per_event.contains_key(caller))
        {
            return Err(RegistryError::AlreadyRegistered {
                event_id,
                attendee: caller.clone(),
            });
        }
        if !event.has_room() {
            return Err(RegistryError::CapacityReached {
                event_id,
                capacity: event.capacity,
            });
        }

        let collection = event.credential_collection.clone();
        let event_name = event.name.clone();
        // Ownership is the final gate; nothing is mutated until it passes.
        if !self.oracle.holds_credential(&collection, caller)? {
            return Err(RegistryError::CredentialNotHeld {
                collection,
                attendee: caller.clone(),
            });
        }

        self.state.registrations.entry(event_id).or_default().insert(
            caller.clone(),
            Registration {
                display_name: display_name.into(),
                checked_in: false,
            },
        );
        self.state.known_registrants.insert(caller.clone());
        let event = self
            .state
            .events
            .get_mut(&event_id)
            .ok_or(RegistryError::InvalidEventId { event_id })?;
        event.registered_count += 1;

        Ok(UserRegistered {
            event_id,
            attendee: caller.clone(),
            event_name,
        })
    }

    /// Marks the caller's registration as checked in.
    ///
    /// Sign-in requires the event to still be active and errors on a
    /// repeat sign-in rather than silently no-opping.
    ///
    /// # Errors
    ///
    /// In order: [`RegistryError::InvalidEventId`],
    /// [`RegistryError::AlreadyEnded`], [`RegistryError::NotRegistered`],
    /// [`RegistryError::AlreadyCheckedIn`].
    pub fn sign_in_for_event(
        &mut self,
        caller: &Address,
        event_id: u64,
    ) -> Result<UserSignedIn, RegistryError> {
        let Some(event) = self.state.events.get(&event_id) else {
            return Err(RegistryError::InvalidEventId { event_id });
        };
        if event.status == EventStatus::Ended {
            return Err(RegistryError::AlreadyEnded { event_id });
        }
        let registration = self
            .state
            .registrations
            .get_mut(&event_id)
            .and_then(|per_event| per_event.get_mut(caller));
        let Some(registration) = registration else {
            return Err(RegistryError::NotRegistered {
                event_id,
                attendee: caller.clone(),
            });
        };
        if registration.checked_in {
            return Err(RegistryError::AlreadyCheckedIn {
                event_id,
                attendee: caller.clone(),
            });
        }

        registration.checked_in = true;

        Ok(UserSignedIn {
            event_id,
            attendee: caller.clone(),
        })
    }

    /// Total events ever created.
    pub fn event_count(&self) -> u64 {
        self.state.event_count
    }

    /// Distinct identities that have ever registered for any event.
    pub fn unique_user_count(&self) -> u64 {
        self.state.known_registrants.len() as u64
    }

    /// Looks up the full record for an event id.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidEventId`] if no such event exists.
    pub fn event(&self, event_id: u64) -> Result<&Event, RegistryError> {
        self.state
            .events
            .get(&event_id)
            .ok_or(RegistryError::InvalidEventId { event_id })
    }

    /// Returns `true` if `identity` holds a registration for the event.
    pub fn is_registered(&self, identity: &Address, event_id: u64) -> bool {
        self.state
            .registrations
            .get(&event_id)
            .map_or(false, |per_event| per_event.contains_key(identity))
    }

    /// Returns the registration for `(event_id, identity)`, if any.
    pub fn registration(&self, event_id: u64, identity: &Address) -> Option<&Registration> {
        self.state
            .registrations
            .get(&event_id)
            .and_then(|per_event| per_event.get(identity))
    }

    /// Iterates events in id order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.state.events.values()
    }
}
