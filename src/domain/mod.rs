//! Domain layer - Note model and the rules that apply to it

pub mod clock;
pub mod note;
pub mod timestamp;

pub use clock::{Clock, SystemClock};
pub use note::{Note, NoteDraft, DEFAULT_TITLE, MAX_TITLE_CHARS, PREVIEW_CHARS};
