//! Common utility functions for command handlers

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::launcher::ScriptFlavor;
use crate::store::AliasStore;

/// Environment variable overriding the alias directory
pub const DIR_ENV: &str = "AKA_DIR";

/// Resolve the alias directory and open the store
///
/// Directory priority: `AKA_DIR` environment variable, then `store.dir` from
/// the global config, then the directory containing the running executable.
///
/// # Errors
/// Returns an error if:
/// - The config file exists but cannot be read or parsed
/// - The executable location cannot be determined
pub fn open_store() -> Result<AliasStore> {
    let config = Config::load()?;

    let dir = match std::env::var_os(DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => match &config.store.dir {
            Some(dir) => dir.clone(),
            None => exe_dir()?,
        },
    };

    let flavor = config.store.flavor.unwrap_or_else(ScriptFlavor::native);
    Ok(AliasStore::new(dir, flavor))
}

/// Directory containing the running executable
///
/// # Errors
/// Returns an error if the executable path cannot be determined
pub fn exe_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    // Resolve symlinks so the store lands next to the real binary
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(PathBuf::from)
        .context("Executable has no parent directory")
}
