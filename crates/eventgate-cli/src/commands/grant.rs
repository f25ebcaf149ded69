//! Grant command implementation.

use eventgate_identity::Address;

use crate::store::{self, StorePaths};

pub fn run(
    paths: &StorePaths,
    collection: String,
    holder: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let collection = Address::parse(collection)?;
    let holder = Address::parse(holder)?;

    let mut oracle = store::load_holdings(&paths.holdings)?;
    oracle.grant(collection.clone(), holder.clone());
    store::save_holdings(&paths.holdings, &oracle)?;

    println!("Granted {} a credential from {}", holder, collection);
    Ok(())
}
