//! Stats command implementation.

use eventgate_registry::{EventRegistry, MemoryOracle};

use crate::store::{self, StorePaths};

pub fn run(paths: &StorePaths) -> Result<(), Box<dyn std::error::Error>> {
    let state = store::load_state(&paths.state)?;
    let registry = EventRegistry::from_state(MemoryOracle::new(), state);

    println!("Events: {}", registry.event_count());
    println!("Unique users: {}", registry.unique_user_count());

    Ok(())
}
