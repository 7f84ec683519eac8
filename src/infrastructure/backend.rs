//! Key-value substrates the note store persists into

use crate::error::{NotepadError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;
use tempfile::NamedTempFile;

/// A store of one serialized blob per key
pub trait KeyValueBackend: Send + Sync {
    /// Read the blob stored under `key`, `None` when it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key` in a single write
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Which substrate to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// JSON files under the workspace data directory
    #[default]
    File,
    /// Process-local map, lost on exit
    Memory,
}

impl BackendKind {
    /// Build the backend; `data_dir` is only used by the file backend
    pub fn build(&self, data_dir: &Path) -> Box<dyn KeyValueBackend> {
        match self {
            BackendKind::File => Box::new(FileBackend::new(data_dir.to_path_buf())),
            BackendKind::Memory => Box::new(MemoryBackend::new()),
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(BackendKind::File),
            "memory" => Ok(BackendKind::Memory),
            _ => Err(format!("Invalid backend: {}", s)),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::File => write!(f, "file"),
            BackendKind::Memory => write!(f, "memory"),
        }
    }
}

/// Durable backend storing each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: PathBuf) -> Self {
        FileBackend { dir }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NotepadError::Io(e)),
        }
    }

    /// Writes to a fresh temp file in the same directory, then renames it into place.
    ///
    /// Every call gets its own temp file, so concurrent writers never share one.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;

        // A failed persist drops the temp file, which removes it
        tmp.persist(self.path_for(key))
            .map_err(|e| NotepadError::Io(e.error))?;
        Ok(())
    }
}

/// In-memory backend, also used as a test double.
///
/// Reads and writes can be made to fail, and writes are counted.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Backend pre-seeded with a raw value under `key`
    pub fn with_entry(key: &str, value: &str) -> Self {
        let backend = MemoryBackend::new();
        if let Ok(mut entries) = backend.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
        backend
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `set` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw stored value, bypassing failure injection
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(NotepadError::Storage("storage unavailable".to_string()));
        }
        let entries = self
            .entries
            .read()
            .map_err(|_| NotepadError::Storage("memory store poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(NotepadError::Storage("quota exceeded".to_string()));
        }
        let mut entries = self
            .entries
            .write()
            .map_err(|_| NotepadError::Storage("memory store poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
