//! Error types for sideway

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the sideway notepad
#[derive(Debug, Error)]
pub enum NotepadError {
    #[error("Not a sideway directory: {0}")]
    NotNotepadDirectory(PathBuf),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Please enter a title or content for your note.")]
    EmptyNote,

    #[error("Invalid note: {0}")]
    Validation(String),

    #[error("Failed to load notes: {0}")]
    LoadFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NotepadError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotepadError::NotNotepadDirectory(_) => 2,
            NotepadError::NoteNotFound(_) => 3,
            NotepadError::EmptyNote | NotepadError::Validation(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotepadError::NotNotepadDirectory(path) => {
                format!(
                    "Not a sideway directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'sideway init' in this directory to create a notepad\n\
                    • Navigate to an existing sideway directory\n\
                    • Set SIDEWAY_ROOT environment variable to your notepad path",
                    path.display()
                )
            }
            NotepadError::NoteNotFound(id) => {
                format!(
                    "Note not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'sideway list' to see note ids\n\
                    • The note may have been deleted from another session",
                    id
                )
            }
            NotepadError::Storage(msg) => {
                format!(
                    "Storage error: {}\n\n\
                    The change was not saved. Please try again.",
                    msg
                )
            }
            NotepadError::LoadFailed(msg) => {
                format!(
                    "Failed to load notes: {}\n\n\
                    Suggestions:\n\
                    • Check that the notes file under .sideway/data is valid JSON\n\
                    • Restore the file from a backup before saving new notes",
                    msg
                )
            }
            NotepadError::Config(msg) => {
                if msg.contains("Invalid backend") {
                    format!(
                        "{}\n\n\
                        Valid backends: file, memory\n\
                        Example: sideway config backend file",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotepadError
pub type Result<T> = std::result::Result<T, NotepadError>;
