//! Show note use case

use crate::domain::{Clock, Note};
use crate::error::{NotepadError, Result};
use crate::infrastructure::{KeyValueBackend, NoteStore};

/// Fetch one note for display
pub fn show_note<B: KeyValueBackend, C: Clock>(store: &NoteStore<B, C>, id: &str) -> Result<Note> {
    store
        .try_load_all()?
        .into_iter()
        .find(|note| note.id == id)
        .ok_or_else(|| NotepadError::NoteNotFound(id.to_string()))
}
