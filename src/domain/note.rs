//! Note model

use crate::domain::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title used when a note is saved with a blank title
pub const DEFAULT_TITLE: &str = "Untitled Note";

/// Longest title the editor accepts, in characters
pub const MAX_TITLE_CHARS: usize = 200;

/// Characters of content shown in a list preview
pub const PREVIEW_CHARS: usize = 100;

/// A persisted note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Content cut to `max_chars` characters, with `...` appended when cut
    pub fn preview(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            return self.content.clone();
        }
        let mut preview: String = self.content.chars().take(max_chars).collect();
        preview.push_str("...");
        preview
    }

    /// Whether the note has been updated since it was created
    pub fn was_edited(&self) -> bool {
        self.updated_at != self.created_at
    }
}

/// Normalize a title: trim, and fall back to `default_title` when blank.
pub fn normalize_title(title: &str, default_title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        default_title.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Normalize content: trim surrounding whitespace.
pub fn normalize_content(content: &str) -> String {
    content.trim().to_string()
}

/// Title and content as typed into the editor, before they are saved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NoteDraft {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Draft pre-filled from an existing note
    pub fn from_note(note: &Note) -> Self {
        NoteDraft::new(note.title.clone(), note.content.clone())
    }

    /// True when both title and content are empty after trimming
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}
