//! Workspace discovery and store construction

use crate::error::{NotepadError, Result};
use crate::infrastructure::backend::KeyValueBackend;
use crate::infrastructure::config::{Config, WORKSPACE_DIR};
use crate::infrastructure::store::NoteStore;
use std::fs;
use std::path::{Path, PathBuf};

/// The note store as the binary uses it: backend picked from config
pub type ConfiguredStore = NoteStore<Box<dyn KeyValueBackend>>;

/// Abstract repository for notepad workspace operations
pub trait NotepadRepository {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .sideway/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .sideway/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .sideway directory exists
    fn is_initialized(&self) -> bool;

    /// Create .sideway directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of NotepadRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the workspace root.
    /// Checks SIDEWAY_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SIDEWAY_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(NotepadError::Config(format!(
                    "SIDEWAY_ROOT is set to '{}' but no .sideway directory found. \
                    Run 'sideway init' in that directory or unset SIDEWAY_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(NotepadError::NotNotepadDirectory(start.to_path_buf())),
            }
        }
    }

    /// Directory the file backend keeps its blobs in
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(WORKSPACE_DIR).join("data")
    }

    /// Build the note store described by `config`
    pub fn open_store(&self, config: &Config) -> ConfiguredStore {
        log::debug!(
            "opening {} store at {} (key {})",
            config.backend,
            self.data_dir().display(),
            config.storage_key
        );
        NoteStore::new(config.backend.build(&self.data_dir()))
            .with_key(config.storage_key.clone())
            .with_default_title(config.default_title.clone())
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }
}

impl NotepadRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(NotepadError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)?;
        fs::create_dir(self.data_dir())?;
        Ok(())
    }
}
