//! Add command - Register a new alias as a generated launcher script

use anyhow::Result;

use crate::color;
use crate::commands::common::open_store;
use crate::launcher::LaunchMode;
use crate::store::AliasStore;

/// Register a new alias
///
/// # Errors
/// Returns an error if:
/// - The alias name is invalid
/// - The alias already exists and `force` is false
/// - The launcher script cannot be written
pub fn cmd_add(
    name: &str,
    target: &str,
    args: &[String],
    fork: bool,
    force: bool,
    color_mode: color::ColorMode,
) -> Result<()> {
    AliasStore::validate_name(name)?;
    let store = open_store()?;

    let mode = if fork {
        LaunchMode::Fork
    } else {
        LaunchMode::Call
    };

    if !force && store.exists(name) {
        anyhow::bail!("alias '{name}' already exists (use --force to overwrite)");
    }

    let content = store.flavor().render(target, args, mode);
    store.write(name, &content)?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!("'{name}' has been added in {mode} mode")
        )
    );

    Ok(())
}
