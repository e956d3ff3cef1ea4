//! Data models shared across the Jot clients.

mod note;

pub use note::{Note, NoteDraft, NoteId, NoteUpdate, UploadTarget, ValidationError};
