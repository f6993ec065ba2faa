use super::changelog::ChangelogConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// main configuration for keepcheck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeepcheckConfig {
    /// changelog-related configuration
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

impl Default for KeepcheckConfig {
    fn default() -> Self {
        Self {
            changelog: ChangelogConfig::default(),
        }
    }
}

impl KeepcheckConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::error::Error::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let config: KeepcheckConfig =
            toml::from_str(&contents).map_err(|e| crate::error::Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(config)
    }

    /// find and load configuration file in the invocation directory
    ///
    /// looks for `keepcheck.toml`; returns default config if not found
    pub fn load_or_default<P: AsRef<Path>>(dir: P) -> Self {
        match Self::find_config_file(&dir) {
            Some(config_path) => {
                // if config exists but can't be parsed, use default
                // (errors will be reported separately)
                Self::load_from_file(&config_path).unwrap_or_default()
            }
            None => Self::default(),
        }
    }

    /// find configuration file in a directory
    pub fn find_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        let config_path = dir.as_ref().join("keepcheck.toml");

        if config_path.exists() && config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}
