//! List command implementation.

use eventgate_registry::{EventRegistry, MemoryOracle};

use crate::output;
use crate::store::{self, StorePaths};

pub fn run(paths: &StorePaths, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let state = store::load_state(&paths.state)?;
    // Queries never consult the oracle.
    let registry = EventRegistry::from_state(MemoryOracle::new(), state);

    if !json {
        output::print_event_header();
    }
    for event in registry.events() {
        if json {
            println!("{}", serde_json::to_string(event)?);
        } else {
            println!("{}", output::format_event_row(event));
        }
    }

    Ok(())
}
