//! Log command implementation.

use eventgate_journal::{JournalReader, ReadMode};

use crate::output;
use crate::store::StorePaths;

pub fn run(paths: &StorePaths, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !paths.journal.exists() {
        return Ok(());
    }

    let mut reader = JournalReader::open(&paths.journal, ReadMode::Strict)?;

    if !json {
        output::print_log_header();
    }
    while let Some(envelope) = reader.read_record()? {
        if json {
            println!("{}", serde_json::to_string(&envelope)?);
        } else {
            println!("{}", output::format_log_row(&envelope));
        }
    }

    Ok(())
}
