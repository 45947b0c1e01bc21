//! Data models for Journali

mod note;

pub use note::{AudioRef, Note, NoteId, VOICE_NOTE_TITLE};
