//! Persistent PATH registration
//!
//! Checking membership is a pure function over the current environment;
//! writing the search path back is platform-specific and goes through the
//! `PathRegistrar` trait so tests can stub the persistence.

use anyhow::{Context, Result};
use std::ffi::{OsStr, OsString};
use std::path::Path;

#[cfg(not(windows))]
use std::path::PathBuf;

/// Reads the process search path and persists additions to it
pub trait PathRegistrar {
    /// Current value of the search-path variable, if set
    fn current_path(&self) -> Option<OsString>;

    /// Persistently append `dir` to the search path. Must be a no-op when the
    /// entry is already recorded.
    ///
    /// # Errors
    /// Returns an error if the persistence mechanism fails
    fn persist_append(&self, dir: &Path) -> Result<()>;
}

/// Registrar backed by the real process environment
pub struct RealPathRegistrar;

impl PathRegistrar for RealPathRegistrar {
    fn current_path(&self) -> Option<OsString> {
        std::env::var_os("PATH")
    }

    #[cfg(windows)]
    fn persist_append(&self, dir: &Path) -> Result<()> {
        // setx persists the user-level PATH; %PATH% is expanded by cmd.exe at
        // invocation time, keeping the existing entries.
        let value = format!("%PATH%;{}", dir.display());
        let status = std::process::Command::new("setx")
            .arg("PATH")
            .arg(&value)
            .status()
            .context("Failed to execute setx")?;

        if !status.success() {
            anyhow::bail!("setx PATH failed with {status}");
        }
        Ok(())
    }

    #[cfg(not(windows))]
    fn persist_append(&self, dir: &Path) -> Result<()> {
        append_profile_line(&profile_path()?, dir)
    }
}

/// True if `dir` is already one of the entries in the search-path value
#[must_use]
pub fn installed_in(path_var: &OsStr, dir: &Path) -> bool {
    std::env::split_paths(path_var).any(|entry| same_dir(&entry, dir))
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(not(windows))]
fn profile_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".profile"))
        .context("Could not determine the home directory")
}

/// Append an `export PATH=...` line for `dir`, skipping the write when an
/// identical line is already present
#[cfg(not(windows))]
fn append_profile_line(profile: &Path, dir: &Path) -> Result<()> {
    use std::io::Write;

    let line = format!("export PATH=\"$PATH:{}\"", dir.display());

    if let Ok(existing) = std::fs::read_to_string(profile) {
        if existing.lines().any(|l| l.trim() == line) {
            return Ok(());
        }
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(profile)
        .with_context(|| format!("Failed to open {}", profile.display()))?;
    writeln!(file, "{line}")
        .with_context(|| format!("Failed to append to {}", profile.display()))?;

    Ok(())
}
