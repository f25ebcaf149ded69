//! Register command implementation.

use eventgate_identity::Address;
use eventgate_registry::EventRegistry;

use crate::store::{self, StorePaths};

pub fn run(
    paths: &StorePaths,
    caller: String,
    event_id: u64,
    display_name: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let caller = Address::parse(caller)?;

    let state = store::load_state(&paths.state)?;
    let oracle = store::load_holdings(&paths.holdings)?;
    let mut registry = EventRegistry::from_state(oracle, state);

    let record = registry.register_for_event(&caller, event_id, display_name)?;

    store::save_state(&paths.state, registry.state())?;
    store::append_record(&paths.journal, record.clone().into())?;

    println!(
        "Registered {} for event {} ({})",
        record.attendee, record.event_id, record.event_name
    );
    Ok(())
}
