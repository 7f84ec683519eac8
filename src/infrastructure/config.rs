//! Configuration management

use crate::domain::DEFAULT_TITLE;
use crate::error::{NotepadError, Result};
use crate::infrastructure::backend::BackendKind;
use crate::infrastructure::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-workspace directory holding config and data
pub const WORKSPACE_DIR: &str = ".sideway";

/// Config keys accepted by `sideway config`
pub const CONFIG_KEYS: [&str; 4] = ["backend", "storage_key", "default_title", "log_level"];

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendKind,
    pub storage_key: String,
    pub default_title: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend: BackendKind::File,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from .sideway/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WORKSPACE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NotepadError::NotNotepadDirectory(path.to_path_buf())
            } else {
                NotepadError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| NotepadError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .sideway/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let workspace_dir = path.join(WORKSPACE_DIR);
        let config_path = workspace_dir.join("config.toml");

        if !workspace_dir.exists() {
            fs::create_dir(&workspace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| NotepadError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_storage_key(&self.storage_key)?;
        validate_default_title(&self.default_title)?;
        validate_log_level(&self.log_level)?;
        Ok(())
    }
}

/// Storage keys become file names, so they are kept to a safe character set
pub fn validate_storage_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(NotepadError::Config(format!(
            "Invalid storage_key: '{}'. Use letters, digits, '_', '-' or '.'",
            key
        )))
    }
}

pub fn validate_default_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(NotepadError::Config(
            "default_title cannot be blank".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_log_level(level: &str) -> Result<()> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(NotepadError::Config(format!(
            "Invalid log_level: '{}'. Valid levels are: {}",
            level,
            LOG_LEVELS.join(", ")
        )))
    }
}
