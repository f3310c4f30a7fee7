//! Runtime configuration, read from `config.toml`.

use super::constants::{AUTOSAVE_INTERVAL_SECONDS, STORAGE_KEY, TICK_INTERVAL_SECONDS};
use crate::error::ConfigError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Settings for the session runtime. Every field has a default, so a partial
/// file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds between decay ticks.
    pub tick_interval_secs: u64,
    /// Seconds between autosaves. `0` disables autosave.
    pub autosave_interval_secs: u64,
    /// Key the snapshot is stored under.
    pub storage_key: String,
    /// Where saves live. `None` means the platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_secs: TICK_INTERVAL_SECONDS,
            autosave_interval_secs: AUTOSAVE_INTERVAL_SECONDS,
            storage_key: STORAGE_KEY.to_string(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// `config.toml` in the platform config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let project_dirs = ProjectDirs::from("", "", "mybaby").ok_or(ConfigError::NoConfigDir)?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Read `path` if it exists, falling back to defaults when it is missing
    /// or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    pub fn autosave_enabled(&self) -> bool {
        self.autosave_interval_secs > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_interval_secs, 5);
        assert_eq!(config.autosave_interval_secs, 30);
        assert_eq!(config.storage_key, "babyverse_state");
        assert!(config.autosave_enabled());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("autosave_interval_secs = 0\n").unwrap();
        assert_eq!(config.tick_interval_secs, 5);
        assert!(!config.autosave_enabled());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            Config::from_toml("tick_interval_secs = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load_or_default(&path), Config::default());

        fs::write(&path, "tick_interval_secs = 1\ndata_dir = \"/tmp/baby\"\n").unwrap();
        let config = Config::load_or_default(&path);
        assert_eq!(config.tick_interval_secs, 1);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/baby")));

        fs::write(&path, "this is not toml [").unwrap();
        assert_eq!(Config::load_or_default(&path), Config::default());
    }
}
