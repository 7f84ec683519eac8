//! Config management use case

use crate::error::{NotepadError, Result};
use crate::infrastructure::config::{
    validate_default_title, validate_log_level, validate_storage_key, CONFIG_KEYS,
};
use crate::infrastructure::{BackendKind, Config, FileSystemRepository, NotepadRepository};
use std::str::FromStr;

/// Service for managing notepad configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "backend" => Ok(config.backend.to_string()),
            "storage_key" => Ok(config.storage_key),
            "default_title" => Ok(config.default_title),
            "log_level" => Ok(config.log_level),
            _ => Err(Self::unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "backend" => {
                config.backend = BackendKind::from_str(value).map_err(NotepadError::Config)?;
            }
            "storage_key" => {
                validate_storage_key(value)?;
                config.storage_key = value.to_string();
            }
            "default_title" => {
                validate_default_title(value)?;
                config.default_title = value.trim().to_string();
            }
            "log_level" => {
                validate_log_level(value)?;
                config.log_level = value.to_lowercase();
            }
            _ => return Err(Self::unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }

    fn unknown_key(key: &str) -> NotepadError {
        NotepadError::Config(format!(
            "Unknown config key: '{}'. Valid keys are: {}",
            key,
            CONFIG_KEYS.join(", ")
        ))
    }
}
