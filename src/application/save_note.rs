//! Save note use case (create or edit)

use crate::application::show_note;
use crate::domain::{Clock, Note, NoteDraft, MAX_TITLE_CHARS};
use crate::error::{NotepadError, Result};
use crate::infrastructure::{KeyValueBackend, NoteStore};

/// Service validating editor drafts before they reach the store
pub struct SaveNoteService<'a, B: KeyValueBackend, C: Clock> {
    store: &'a NoteStore<B, C>,
}

impl<'a, B: KeyValueBackend, C: Clock> SaveNoteService<'a, B, C> {
    pub fn new(store: &'a NoteStore<B, C>) -> Self {
        SaveNoteService { store }
    }

    /// Save a draft as a new note
    pub fn create(&self, draft: &NoteDraft) -> Result<Note> {
        Self::validate(draft)?;
        self.store.add(&draft.title, &draft.content)
    }

    /// Save a draft over the note with `id`
    pub fn update(&self, id: &str, draft: &NoteDraft) -> Result<Note> {
        Self::validate(draft)?;
        self.store
            .update(id, &draft.title, &draft.content)?
            .ok_or_else(|| NotepadError::NoteNotFound(id.to_string()))
    }

    /// Edit a note, keeping the current value of any field left as `None`
    pub fn edit(&self, id: &str, title: Option<String>, content: Option<String>) -> Result<Note> {
        let current = show_note(self.store, id)?;
        let mut draft = NoteDraft::from_note(&current);
        if let Some(title) = title {
            draft.title = title;
        }
        if let Some(content) = content {
            draft.content = content;
        }
        self.update(id, &draft)
    }

    fn validate(draft: &NoteDraft) -> Result<()> {
        if draft.is_blank() {
            return Err(NotepadError::EmptyNote);
        }
        let title_chars = draft.title.trim().chars().count();
        if title_chars > MAX_TITLE_CHARS {
            return Err(NotepadError::Validation(format!(
                "title is {} characters long, the limit is {}",
                title_chars, MAX_TITLE_CHARS
            )));
        }
        Ok(())
    }
}
