//! Show command implementation.

use eventgate_registry::{EventRegistry, MemoryOracle};

use crate::store::{self, StorePaths};

pub fn run(paths: &StorePaths, event_id: u64) -> Result<(), Box<dyn std::error::Error>> {
    let state = store::load_state(&paths.state)?;
    let registry = EventRegistry::from_state(MemoryOracle::new(), state);

    let event = registry.event(event_id)?;
    println!("{}", serde_json::to_string_pretty(event)?);

    Ok(())
}
