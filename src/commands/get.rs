//! Get command - Print the stored launcher script for an alias

use anyhow::Result;

use crate::commands::common::open_store;
use crate::store::AliasStore;

/// Print the raw launcher content for an alias to stdout
///
/// # Errors
/// Returns an error if:
/// - The alias name is invalid
/// - No alias with that name is registered
/// - The launcher script cannot be read
pub fn cmd_get(name: &str) -> Result<()> {
    AliasStore::validate_name(name)?;
    let store = open_store()?;

    if !store.exists(name) {
        anyhow::bail!("alias '{name}' doesn't exist");
    }

    print!("{}", store.read(name)?);
    Ok(())
}
