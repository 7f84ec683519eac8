//! sideway - Side-panel notepad
//!
//! Short text notes kept as one JSON collection in a pluggable key-value
//! store, with a command-line front end.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use domain::{Note, NoteDraft};
pub use error::NotepadError;
pub use infrastructure::{KeyValueBackend, NoteStore};
