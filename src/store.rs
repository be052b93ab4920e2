//! Alias store
//!
//! The filesystem is the sole source of truth: one launcher script per alias,
//! all in a single directory, identified by the flavor's file extension.
//! There is no in-memory registry and no locking; every operation is a single
//! existence check followed by one read, write, or delete.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::launcher::ScriptFlavor;

/// Directory of launcher scripts, keyed by alias name
#[derive(Debug)]
pub struct AliasStore {
    dir: PathBuf,
    flavor: ScriptFlavor,
}

/// A registered alias together with the file metadata shown by `list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub name: String,
    pub modified: Option<DateTime<Utc>>,
}

impl AliasStore {
    #[must_use]
    pub const fn new(dir: PathBuf, flavor: ScriptFlavor) -> Self {
        Self { dir, flavor }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub const fn flavor(&self) -> ScriptFlavor {
        self.flavor
    }

    /// Path of the launcher script backing `name`
    #[must_use]
    pub fn script_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{}", self.flavor.extension()))
    }

    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.script_path(name).is_file()
    }

    /// Read the raw launcher content for `name`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.script_path(name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read alias file: {}", path.display()))
    }

    /// Write (or overwrite) the launcher content for `name`
    ///
    /// Creates the alias directory if needed. Sh-flavor scripts get the
    /// executable bit so the shell can run them by name.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written
    pub fn write(&self, name: &str, content: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create alias directory: {}", self.dir.display()))?;

        let path = self.script_path(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write alias file: {}", path.display()))?;

        #[cfg(unix)]
        if self.flavor == ScriptFlavor::Sh {
            make_executable(&path)
                .with_context(|| format!("Failed to mark executable: {}", path.display()))?;
        }

        Ok(())
    }

    /// Delete the launcher script for `name`
    ///
    /// # Errors
    /// Returns an error if the file cannot be removed
    pub fn remove(&self, name: &str) -> Result<()> {
        let path = self.script_path(name);
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove alias file: {}", path.display()))
    }

    /// Enumerate registered aliases, sorted by name
    ///
    /// A directory entry counts as an alias when it is a regular file and its
    /// extension case-insensitively matches the flavor's extension. Anything
    /// else in the directory is ignored.
    ///
    /// # Errors
    /// Returns an error if the directory exists but cannot be read
    pub fn entries(&self) -> Result<Vec<AliasEntry>> {
        // A store that was never written to has no aliases
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let read_dir = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read alias directory: {}", self.dir.display()))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry =
                entry.with_context(|| format!("Failed to read entry in {}", self.dir.display()))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let matches_flavor = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(self.flavor.extension()));
            if !matches_flavor {
                continue;
            }

            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }

            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .ok()
                .map(DateTime::<Utc>::from);

            entries.push(AliasEntry {
                name: name.to_string(),
                modified,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Validate an alias name before using it as a filename
    ///
    /// Names must be non-empty, must not be `.` or `..`, and must not contain
    /// path separators or NUL.
    ///
    /// # Errors
    /// Returns an error describing why the name is rejected
    pub fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("invalid alias name: name is empty");
        }
        if name == "." || name == ".." {
            anyhow::bail!("invalid alias name '{name}': reserved filename");
        }
        if name.contains('/') || name.contains('\\') {
            anyhow::bail!("invalid alias name '{name}': path separators are not allowed");
        }
        if name.contains('\0') {
            anyhow::bail!("invalid alias name: NUL is not allowed");
        }
        Ok(())
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms)
}

/// Abbreviate a path under the home directory to `~/...` for display
#[must_use]
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if path == home {
            return "~".to_string();
        }
        if let Ok(rel) = path.strip_prefix(&home) {
            return format!("~/{}", rel.display());
        }
    }
    path.display().to_string()
}
