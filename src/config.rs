//! Application configuration.

use crate::consts::ui_consts::DEFAULT_SPLASH_DELAY_MS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config file: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Splash screen dwell time in milliseconds.
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,
}

fn default_splash_delay_ms() -> u64 {
    DEFAULT_SPLASH_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
        }
    }
}

impl Config {
    /// Create Config with the given splash dwell.
    #[allow(unused)]
    pub fn new(splash_delay_ms: u64) -> Self {
        Config { splash_delay_ms }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a `ConfigError` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns a `ConfigError` if writing to file fails or serialization fails.
    #[allow(unused)]
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Path of the configuration file, under the user's home directory.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
    })?;
    Ok(home_path.join(".aayu").join("config.json"))
}
