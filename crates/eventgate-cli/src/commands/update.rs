//! Update command implementation.

use eventgate_identity::Address;
use eventgate_registry::{Category, EventRegistry};

use crate::store::{self, StorePaths};

pub fn run(
    paths: &StorePaths,
    caller: String,
    event_id: u64,
    collection: String,
    name: String,
    category: Category,
    capacity: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let caller = Address::parse(caller)?;
    let collection = Address::parse(collection)?;

    let state = store::load_state(&paths.state)?;
    let oracle = store::load_holdings(&paths.holdings)?;
    let mut registry = EventRegistry::from_state(oracle, state);

    let record = registry.update_event(&caller, event_id, collection, name, category, capacity)?;

    store::save_state(&paths.state, registry.state())?;
    store::append_record(&paths.journal, record.clone().into())?;

    println!("Updated event {}: {}", record.event_id, record.name);
    Ok(())
}
