//! Remove command - Delete one or multiple aliases

use anyhow::Result;
use std::collections::HashSet;

use crate::color;
use crate::commands::common::open_store;
use crate::store::AliasStore;

/// Remove one or more aliases
///
/// All targets are validated before anything is deleted, so a missing name
/// fails the whole invocation without partial removal.
///
/// # Errors
/// Returns an error if:
/// - Any alias name is invalid
/// - Any named alias does not exist
/// - A launcher script cannot be removed
pub fn cmd_rm(names: &[String], color_mode: color::ColorMode) -> Result<()> {
    let store = open_store()?;

    let mut seen = HashSet::new();
    let mut to_remove = Vec::new();

    for name in names {
        AliasStore::validate_name(name)?;

        if !seen.insert(name.as_str()) {
            eprintln!(
                "{}",
                color::warn(color_mode, format!("Duplicate target '{name}' (skipping)"))
            );
            continue;
        }

        if !store.exists(name) {
            anyhow::bail!("alias '{name}' doesn't exist");
        }

        to_remove.push(name.as_str());
    }

    for name in to_remove {
        store.remove(name)?;
        eprintln!(
            "{}",
            color::success(color_mode, format!("'{name}' has been removed"))
        );
    }

    Ok(())
}
