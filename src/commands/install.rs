//! Install command - Ensure the alias directory is on the search path
//!
//! This is the one operation that mutates state outside the alias directory.
//! It is an idempotent "ensure installed": running it twice never duplicates
//! the path entry, never rewrites the self alias, and never fails.

use anyhow::{Context, Result};
use std::path::Path;

use crate::color;
use crate::commands::common::open_store;
use crate::integrations::path_env::{installed_in, PathRegistrar, RealPathRegistrar};
use crate::launcher::LaunchMode;
use crate::store::{display_path, AliasStore};

/// Alias registered for the tool itself, so `aka` stays invocable by name
/// once the directory is on PATH
const SELF_ALIAS: &str = "aka";

/// Ensure the alias directory is on the persistent search path
///
/// With `check_only`, nothing is modified: the command reports whether the
/// directory is present and fails when it is not.
///
/// # Errors
/// Returns an error if:
/// - `check_only` is set and the directory is absent from PATH
/// - The search path cannot be persisted
/// - The self alias cannot be written
pub fn cmd_install(check_only: bool, color_mode: color::ColorMode) -> Result<()> {
    let store = open_store()?;
    let self_target =
        std::env::current_exe().context("Failed to locate the running executable")?;

    run_install(
        &store,
        &RealPathRegistrar,
        &self_target,
        check_only,
        color_mode,
    )
}

fn run_install<R: PathRegistrar>(
    store: &AliasStore,
    registrar: &R,
    self_target: &Path,
    check_only: bool,
    color_mode: color::ColorMode,
) -> Result<()> {
    let on_path = registrar
        .current_path()
        .is_some_and(|path_var| installed_in(&path_var, store.dir()));

    if on_path {
        eprintln!(
            "{}",
            color::success(
                color_mode,
                format!(
                    "Alias directory is already on PATH: {}",
                    display_path(store.dir())
                )
            )
        );
    } else if check_only {
        anyhow::bail!(
            "alias directory is not on PATH: {}\n\
             Run 'aka install' to register it, or add it to your PATH manually",
            display_path(store.dir())
        );
    } else {
        registrar.persist_append(store.dir())?;
        eprintln!(
            "{}",
            color::success(
                color_mode,
                format!(
                    "Added {} to the persistent search path",
                    display_path(store.dir())
                )
            )
        );
        eprintln!(
            "{}",
            color::info(color_mode, "Open a new shell for the change to take effect")
        );
    }

    if check_only {
        return Ok(());
    }

    // Register the tool under its own name via a direct in-process write,
    // skipped when an alias by that name already exists
    if store.exists(SELF_ALIAS) {
        return Ok(());
    }

    let content = store.flavor().render(
        self_target.to_string_lossy().as_ref(),
        &[],
        LaunchMode::Call,
    );
    store.write(SELF_ALIAS, &content)?;
    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!("'{SELF_ALIAS}' has been added in normal mode")
        )
    );

    Ok(())
}
