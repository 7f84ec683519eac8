//! Delete note use case

use crate::domain::Clock;
use crate::error::Result;
use crate::infrastructure::{KeyValueBackend, NoteStore};

/// Delete a note; `Ok(false)` when there was nothing to delete.
pub fn delete_note<B: KeyValueBackend, C: Clock>(store: &NoteStore<B, C>, id: &str) -> Result<bool> {
    let removed = store.delete(id)?;
    if !removed {
        log::info!("no note with id {} to delete", id);
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryBackend;

    #[test]
    fn test_delete_then_delete_again() {
        let store = NoteStore::new(MemoryBackend::new());
        let note = store.add("t", "c").unwrap();

        assert!(delete_note(&store, &note.id).unwrap());
        assert!(!delete_note(&store, &note.id).unwrap());
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_delete_write_failure_is_reported() {
        let store = NoteStore::new(MemoryBackend::new());
        let note = store.add("t", "c").unwrap();
        store.backend().fail_writes(true);

        assert!(delete_note(&store, &note.id).is_err());
        store.backend().fail_writes(false);
        assert_eq!(store.load_all(), vec![note]);
    }
}
