//! Configuration module
//!
//! Loads the global `aka` configuration from a TOML file. There is no
//! per-directory config: the alias store is machine-wide, so only the global
//! file applies.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::launcher::ScriptFlavor;

/// Configuration for aka
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

/// Alias store settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Directory holding the generated launcher scripts.
    /// Defaults to the directory the executable lives in.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Script dialect to generate. Defaults to the native flavor
    /// (batch on Windows, sh elsewhere).
    #[serde(default)]
    pub flavor: Option<ScriptFlavor>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load the global configuration, falling back to defaults when the file
    /// does not exist
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }
        Ok(Self::default())
    }

    /// Get the global config path
    /// Respects `XDG_CONFIG_HOME` on all platforms.
    /// Fallback: `$HOME/.config/aka/config.toml`
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;

        Some(config_home.join("aka").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.store.dir.is_none());
        assert!(config.store.flavor.is_none());
    }

    #[test]
    fn test_store_config_from_toml() {
        let toml = r#"
            [store]
            dir = "/opt/aliases"
            flavor = "batch"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.store.dir, Some(PathBuf::from("/opt/aliases")));
        assert_eq!(config.store.flavor, Some(ScriptFlavor::Batch));
    }

    #[test]
    fn test_partial_store_config() {
        let toml = r#"
            [store]
            flavor = "sh"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.store.dir.is_none());
        assert_eq!(config.store.flavor, Some(ScriptFlavor::Sh));
    }

    #[test]
    fn test_invalid_flavor_is_rejected() {
        let toml = r#"
            [store]
            flavor = "powershell"
        "#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file(Path::new("/nonexistent/aka.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_parses() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[store]\ndir = \"/tmp/aliases\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.store.dir, Some(PathBuf::from("/tmp/aliases")));
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "store = [not toml").unwrap();

        let result = Config::from_file(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config file"));
    }

    #[test]
    #[serial_test::serial]
    fn test_global_config_path_default() {
        temp_env::with_var("XDG_CONFIG_HOME", None::<&str>, || {
            if let Some(path) = Config::global_config_path() {
                assert!(path.ends_with(".config/aka/config.toml"));
            }
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_global_config_path_with_xdg_env() {
        let xdg_path = std::env::temp_dir().join("xdg_config");
        temp_env::with_var("XDG_CONFIG_HOME", Some(&xdg_path), || {
            let path = Config::global_config_path();
            assert_eq!(path, Some(xdg_path.join("aka/config.toml")));
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_global_config_path_relative_xdg_ignored() {
        temp_env::with_var("XDG_CONFIG_HOME", Some("relative/path"), || {
            if let Some(path) = Config::global_config_path() {
                assert!(path.ends_with(".config/aka/config.toml"));
            }
        });
    }

    #[test]
    #[serial_test::serial]
    fn test_load_without_global_uses_defaults() {
        let fake_xdg = std::env::temp_dir().join("aka_fake_xdg_no_global");
        temp_env::with_var("XDG_CONFIG_HOME", Some(&fake_xdg), || {
            let config = Config::load().unwrap();
            assert!(config.store.dir.is_none());
        });
    }
}
