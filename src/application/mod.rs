//! Application layer - Use cases and orchestration

pub mod delete_note;
pub mod init;
pub mod list_notes;
pub mod manage_config;
pub mod save_note;
pub mod show_note;

pub use delete_note::delete_note;
pub use init::InitService;
pub use list_notes::list_notes;
pub use manage_config::ConfigService;
pub use save_note::SaveNoteService;
pub use show_note::show_note;
