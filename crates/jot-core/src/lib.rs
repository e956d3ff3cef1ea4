//! jot-core - Core library for Jot
//!
//! This crate contains the shared models, client configuration, and the HTTP
//! clients used by the Jot interfaces to talk to the notes API.

pub mod auth;
pub mod config;
pub mod models;
pub mod notes;
pub mod util;

pub use config::ClientConfig;
pub use models::{Note, NoteDraft, NoteId, NoteUpdate, UploadTarget};
