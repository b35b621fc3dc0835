//! Global CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration stored in `<config_dir>/evcal/config.toml`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to the JSON event store. Defaults to the user data directory.
    pub store_path: Option<PathBuf>,
    /// Calendar name used for exports.
    pub calendar_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: None,
            calendar_name: "Event Calendar".to_string(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config = toml::from_str(&content)
                .with_context(|| format!("Invalid config at {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("evcal").join("config.toml"))
    }

    /// The resolved store path: configured value or the default location.
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.store_path {
            return Ok(path.clone());
        }
        let dir = dirs::data_dir().context("Could not determine data directory")?;
        Ok(dir.join("evcal").join("events.json"))
    }
}
