//! Infrastructure layer - External I/O and persistence

pub mod backend;
pub mod config;
pub mod repository;
pub mod store;

pub use backend::{BackendKind, FileBackend, KeyValueBackend, MemoryBackend};
pub use config::Config;
pub use repository::{ConfiguredStore, FileSystemRepository, NotepadRepository};
pub use store::{NoteStore, DEFAULT_STORAGE_KEY};
