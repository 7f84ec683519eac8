//! Initialize notepad use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, NotepadRepository};
use std::fs;
use std::path::Path;

pub struct InitService;

impl InitService {
    /// Initialize a new notepad workspace at the specified path.
    pub fn execute(path: &Path, config: &Config) -> Result<FileSystemRepository> {
        config.validate()?;

        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;
        repo.save_config(config)?;

        log::info!("initialized notepad at {}", path.display());
        Ok(repo)
    }
}
