//! Application state management
//!
//! Global state accessible via Dioxus context providers, plus the pure
//! reconciliation helpers for the server-owned note collection.

use std::sync::Arc;

use dioxus::prelude::*;

use jot_core::{Note, NoteId};

use crate::services::{AuthService, NotesApiService};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Bearer token of the active session, if signed in
    pub session: Signal<Option<String>>,
    /// Email carried from sign-up to the confirmation step (in memory only)
    pub pending_confirmation_email: Signal<Option<String>>,
    /// Auth API service, if the client is configured
    pub auth_service: Signal<Option<Arc<AuthService>>>,
    /// Notes API service, if the client is configured
    pub notes_api: Signal<Option<Arc<NotesApiService>>>,
    /// Startup configuration error for UI display
    pub init_error: Signal<Option<String>>,
}

impl AppState {
    /// Whether a session token is currently present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        (self.session)().is_some()
    }
}

/// Prepend a freshly created note, keeping the collection newest-first.
pub fn prepend_note(notes: &mut Vec<Note>, note: Note) {
    notes.insert(0, note);
}

/// Replace the entry matching the updated note's id with the server's copy.
///
/// Leaves the collection untouched when the id is no longer present (the note
/// may have been deleted while the update was in flight).
pub fn replace_note(notes: &mut [Note], updated: Note) {
    if let Some(existing) = notes.iter_mut().find(|note| note.id == updated.id) {
        *existing = updated;
    }
}

/// Remove the entry with the given id after a confirmed server-side delete.
pub fn remove_note(notes: &mut Vec<Note>, id: &NoteId) {
    notes.retain(|note| &note.id != id);
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn note(id: &str, title: &str) -> Note {
        Note {
            id: NoteId::from(id),
            title: title.to_string(),
            content: format!("{title} body"),
            created_at: Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap(),
            attachment_s3_key: None,
            attachment_url: None,
        }
    }

    #[test]
    fn sequential_creates_keep_newest_first() {
        let mut notes = Vec::new();
        for index in 1..=4 {
            prepend_note(&mut notes, note(&format!("n-{index}"), "note"));
        }
        let ids: Vec<&str> = notes.iter().map(|note| note.id.as_str()).collect();
        assert_eq!(ids, ["n-4", "n-3", "n-2", "n-1"]);
    }

    #[test]
    fn replace_note_picks_up_server_normalization() {
        let mut notes = vec![note("n-1", "first"), note("n-2", "second")];
        let mut updated = note("n-2", "second (edited)");
        updated.content = "normalized body".to_string();

        replace_note(&mut notes, updated);

        assert_eq!(notes[1].title, "second (edited)");
        assert_eq!(notes[1].content, "normalized body");
        assert_eq!(notes[0].title, "first");
    }

    #[test]
    fn replace_note_ignores_unknown_ids() {
        let mut notes = vec![note("n-1", "first")];
        replace_note(&mut notes, note("n-9", "ghost"));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "first");
    }

    #[test]
    fn remove_note_deletes_exactly_one_entry() {
        let mut notes = vec![note("n-1", "first"), note("n-2", "second")];
        remove_note(&mut notes, &NoteId::from("n-1"));
        let ids: Vec<&str> = notes.iter().map(|note| note.id.as_str()).collect();
        assert_eq!(ids, ["n-2"]);
    }
}
