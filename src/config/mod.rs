//! Configuration management for artable.
//!
//! This module handles loading and saving the TOML configuration file,
//! which describes the remote collection endpoint and UI settings.

mod settings;
mod source;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use settings::Settings;
pub use source::{SourceConfig, DEFAULT_PAGE_SIZE, DEFAULT_URL, MAX_PAGE_SIZE};

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "ARTABLE_CONFIG";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The configuration directory could not be created.
    #[error("Failed to create configuration directory: {0}")]
    CreateDirError(std::io::Error),

    /// The configuration file could not be read.
    #[error("Failed to read configuration file: {0}")]
    ReadError(std::io::Error),

    /// The configuration file could not be written.
    #[error("Failed to write configuration file: {0}")]
    WriteError(std::io::Error),

    /// The configuration file is not valid TOML for this schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Remote collection endpoint.
    pub source: SourceConfig,
    /// UI settings.
    pub settings: Settings,
}

impl Config {
    /// Get the configuration file path.
    ///
    /// Uses `ARTABLE_CONFIG` when set, otherwise
    /// `<config dir>/artable/config.toml`.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("artable").join("config.toml"))
    }

    /// Load the configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    /// Load and validate the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Write the configuration to a file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(ConfigError::WriteError)?;
        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;
        if self.settings.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply command line overrides and re-validate.
    pub fn with_overrides(mut self, url: Option<String>, page_size: Option<u32>) -> Result<Self> {
        if let Some(url) = url {
            self.source.url = url;
        }
        if let Some(page_size) = page_size {
            self.source.page_size = page_size;
        }
        self.validate()?;
        Ok(self)
    }
}
