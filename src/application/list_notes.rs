//! List notes use case

use crate::domain::{Clock, Note};
use crate::error::Result;
use crate::infrastructure::{KeyValueBackend, NoteStore};

/// List notes newest-created first, optionally capped at `limit`.
///
/// Uses the strict load so that a failed read is reported instead of being
/// shown as an empty notepad.
pub fn list_notes<B: KeyValueBackend, C: Clock>(
    store: &NoteStore<B, C>,
    limit: Option<usize>,
) -> Result<Vec<Note>> {
    let mut notes = store.try_load_all()?;
    if let Some(limit) = limit {
        notes.truncate(limit);
    }
    Ok(notes)
}
