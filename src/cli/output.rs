//! Output formatting utilities

use crate::domain::{Note, PREVIEW_CHARS};

const DATE_FORMAT: &str = "%d-%m-%Y";

/// Format a list of notes for display
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{}  {}  {}\n",
            note.id,
            note.updated_at.format(DATE_FORMAT),
            note.title
        ));
        let preview = note.preview(PREVIEW_CHARS).replace('\n', " ");
        if !preview.is_empty() {
            output.push_str(&format!("    {}\n", preview));
        }
    }
    output
}

/// Format one note with its dates and full content
pub fn format_note_detail(note: &Note) -> String {
    let mut output = format!("{}\n", note.title);

    output.push_str(&format!("Created: {}", note.created_at.format(DATE_FORMAT)));
    if note.was_edited() {
        output.push_str(&format!(" | Updated: {}", note.updated_at.format(DATE_FORMAT)));
    }
    output.push_str("\n\n");

    if !note.content.is_empty() {
        output.push_str(&note.content);
        output.push('\n');
    }
    output
}
