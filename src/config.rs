//! Application settings.
//!
//! Settings are read from `{config_dir}/katakana/settings.json` when present and
//! fall back to built-in defaults otherwise. Every key is optional.

use crate::dictionary::DictionarySource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_DIR_NAME: &str = "katakana";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const DICTIONARY_FILE_NAME: &str = "EnglishKatakanaDictionary.csv";
pub const DEFAULT_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/ddviet/EnglishToKatakanaInputSupporter/master/EnglishKatakanaDictionary.csv";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Error types for configuration loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Platform data or config directory could not be determined
    #[error("{0} directory not found")]
    DirNotFound(&'static str),
    /// Settings file exists but could not be read
    #[error("Failed to read settings: {0}")]
    Read(String),
    /// Settings file is not valid JSON for Settings
    #[error("Invalid settings file: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Local dictionary file; defaults to the app data directory
    pub dictionary_path: Option<PathBuf>,
    /// Remote CSV endpoint used for the startup refresh
    pub remote_url: String,
    /// Timeout for the remote fetch, in seconds
    pub http_timeout_secs: u64,
    /// Whether to fetch the remote dictionary at startup
    pub remote_refresh: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            remote_refresh: true,
        }
    }
}

impl Settings {
    /// Load settings from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&settings_path()?)
    }

    /// Load settings from `path`, returning defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                crate::debug!("No settings file at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Read(e.to_string())),
        };

        let settings: Settings =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        crate::debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Resolve the local dictionary path
    pub fn dictionary_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.dictionary_path {
            Some(path) => Ok(path.clone()),
            None => default_dictionary_path(),
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Build the dictionary source described by these settings
    pub fn source(&self) -> Result<DictionarySource, ConfigError> {
        Ok(
            DictionarySource::new(self.dictionary_path()?, self.remote_url.clone())
                .with_timeout(self.http_timeout()),
        )
    }
}

/// Returns {config_dir}/katakana/settings.json
pub fn settings_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::DirNotFound("Config"))?;
    Ok(config_dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Returns {data_dir}/katakana/EnglishKatakanaDictionary.csv
pub fn default_dictionary_path() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir().ok_or(ConfigError::DirNotFound("Data"))?;
    Ok(data_dir.join(APP_DIR_NAME).join(DICTIONARY_FILE_NAME))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
