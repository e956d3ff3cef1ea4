//! Dashboard view - the authenticated notes manager.

use std::collections::{HashMap, HashSet};

use dioxus::prelude::*;

use jot_core::{Note, NoteId, NoteUpdate};

use crate::app::Route;
use crate::components::{Button, ButtonVariant, NoteCard, NoteForm, RequireSession};
use crate::state::{prepend_note, remove_note, replace_note, AppState};
use crate::theme;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RequireSession {
            NotesManager {}
        }
    }
}

/// The note collection plus per-note interaction state, keyed by note id.
#[component]
fn NotesManager() -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();
    let colors = theme::palette();

    let notes = use_signal(Vec::<Note>::new);
    let list_error = use_signal(|| None::<String>);
    let list_loading = use_signal(|| false);

    // One note mid-edit at a time; the draft lives here so switching cards
    // cannot leak a stale draft into another note.
    let mut editing = use_signal(|| None::<NoteId>);
    let mut edit_title = use_signal(String::new);
    let mut edit_content = use_signal(String::new);
    let saving = use_signal(|| false);

    let mut pending_delete = use_signal(HashSet::<NoteId>::new);
    let deleting = use_signal(HashSet::<NoteId>::new);
    let mut card_errors = use_signal(HashMap::<NoteId, String>::new);

    // Rebuild the collection from the server on every session-token change
    use_effect(move || {
        let token = (state.session)();
        let notes_api = state.notes_api.read().clone();
        let mut notes_signal = notes;
        let mut error_signal = list_error;
        let mut loading_signal = list_loading;

        notes_signal.set(Vec::new());
        error_signal.set(None);

        let Some(token) = token else {
            return;
        };
        let Some(notes_api) = notes_api else {
            error_signal.set(Some("Notes API is not configured.".to_string()));
            return;
        };

        loading_signal.set(true);
        spawn(async move {
            match notes_api.list_notes(&token).await {
                Ok(fetched) => {
                    tracing::debug!("Loaded {} notes", fetched.len());
                    notes_signal.set(fetched);
                }
                Err(fetch_error) => {
                    tracing::error!("Failed to fetch notes: {}", fetch_error);
                    error_signal.set(Some(fetch_error.to_string()));
                }
            }
            loading_signal.set(false);
        });
    });

    let mut notes_for_create = notes;
    let on_created = move |note: Note| {
        prepend_note(&mut notes_for_create.write(), note);
    };

    let sign_out = move |_: MouseEvent| {
        if let Some(service) = state.auth_service.read().clone() {
            if let Err(sign_out_error) = service.sign_out() {
                tracing::warn!("Failed to clear persisted session: {}", sign_out_error);
            }
        }
        let mut session_signal = state.session;
        session_signal.set(None);
        nav.replace(Route::SignIn {});
    };

    let note_items = notes();
    let editing_id = editing();
    let pending_ids = pending_delete();
    let deleting_ids = deleting();
    let errors = card_errors();

    rsx! {
        div {
            class: "dashboard",
            style: "
                max-width: 720px;
                margin: 0 auto;
                padding: 24px 16px 48px;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",

            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                h1 {
                    style: "margin: 0; font-size: 24px;",
                    "Your Notes"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: sign_out,
                    "Sign Out"
                }
            }

            NoteForm { on_created }

            if let Some(error) = list_error() {
                div {
                    style: "font-size: 13px; color: {colors.error};",
                    "{error}"
                }
            }

            if list_loading() {
                div {
                    style: "color: {colors.text_muted};",
                    "Loading notes..."
                }
            } else if note_items.is_empty() {
                div {
                    style: "padding: 20px; text-align: center; color: {colors.text_muted};",
                    "You haven't created any notes yet."
                }
            } else {
                div {
                    class: "notes-list",
                    style: "display: flex; flex-direction: column; gap: 12px;",

                    for note in note_items {
                        {
                            let note_id = note.id.clone();
                            let is_editing = editing_id.as_ref() == Some(&note_id);
                            let is_pending = pending_ids.contains(&note_id);
                            let is_deleting = deleting_ids.contains(&note_id);
                            let card_error = errors.get(&note_id).cloned();

                            let note_title = note.title.clone();
                            let note_content = note.content.clone();
                            let id_for_start = note_id.clone();
                            let id_for_cancel = note_id.clone();
                            let id_for_save = note_id.clone();
                            let id_for_intent = note_id.clone();
                            let id_for_cancel_delete = note_id.clone();
                            let id_for_confirm = note_id.clone();

                            rsx! {
                                NoteCard {
                                    key: "{note_id}",
                                    note: note.clone(),
                                    editing: is_editing,
                                    pending_delete: is_pending,
                                    saving: is_editing && saving(),
                                    deleting: is_deleting,
                                    error: card_error,
                                    edit_title: if is_editing { edit_title() } else { String::new() },
                                    edit_content: if is_editing { edit_content() } else { String::new() },
                                    on_edit_title: move |value| edit_title.set(value),
                                    on_edit_content: move |value| edit_content.set(value),
                                    on_start_edit: move |_| {
                                        if saving() {
                                            return;
                                        }
                                        editing.set(Some(id_for_start.clone()));
                                        edit_title.set(note_title.clone());
                                        edit_content.set(note_content.clone());
                                        pending_delete.write().remove(&id_for_start);
                                        card_errors.write().remove(&id_for_start);
                                    },
                                    on_cancel_edit: move |_| {
                                        editing.set(None);
                                        card_errors.write().remove(&id_for_cancel);
                                    },
                                    on_save: move |_| {
                                        save_note(state, id_for_save.clone(), notes, editing, saving, card_errors, edit_title(), edit_content());
                                    },
                                    on_delete_intent: move |_| {
                                        pending_delete.write().insert(id_for_intent.clone());
                                        if editing() == Some(id_for_intent.clone()) {
                                            editing.set(None);
                                        }
                                        card_errors.write().remove(&id_for_intent);
                                    },
                                    on_cancel_delete: move |_| {
                                        pending_delete.write().remove(&id_for_cancel_delete);
                                    },
                                    on_confirm_delete: move |_| {
                                        delete_note(state, id_for_confirm.clone(), notes, pending_delete, deleting, card_errors);
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Push the full edited title/content to the server, then reconcile with the
/// returned note and leave edit mode.
#[allow(clippy::too_many_arguments)]
fn save_note(
    state: AppState,
    id: NoteId,
    notes: Signal<Vec<Note>>,
    editing: Signal<Option<NoteId>>,
    saving: Signal<bool>,
    card_errors: Signal<HashMap<NoteId, String>>,
    title: String,
    content: String,
) {
    let mut notes_signal = notes;
    let mut editing_signal = editing;
    let mut saving_signal = saving;
    let mut card_errors_signal = card_errors;

    if saving_signal() {
        return;
    }
    card_errors_signal.write().remove(&id);

    let update = NoteUpdate { title, content };
    if let Err(validation) = update.validate() {
        card_errors_signal.write().insert(id, validation.to_string());
        return;
    }
    let Some(token) = (state.session)() else {
        return;
    };
    let Some(notes_api) = state.notes_api.read().clone() else {
        card_errors_signal
            .write()
            .insert(id, "Notes API is not configured.".to_string());
        return;
    };

    saving_signal.set(true);
    spawn(async move {
        match notes_api.update_note(&token, &id, &update).await {
            Ok(updated) => {
                replace_note(&mut notes_signal.write(), updated);
                editing_signal.set(None);
            }
            Err(update_error) => {
                tracing::error!("Failed to update note {}: {}", id, update_error);
                card_errors_signal
                    .write()
                    .insert(id.clone(), update_error.to_string());
            }
        }
        saving_signal.set(false);
    });
}

/// Fire the confirmed delete; the local entry goes away only after the server
/// acknowledges, and the pending confirmation is cleared either way.
fn delete_note(
    state: AppState,
    id: NoteId,
    notes: Signal<Vec<Note>>,
    pending_delete: Signal<HashSet<NoteId>>,
    deleting: Signal<HashSet<NoteId>>,
    card_errors: Signal<HashMap<NoteId, String>>,
) {
    let mut notes_signal = notes;
    let mut pending_signal = pending_delete;
    let mut deleting_signal = deleting;
    let mut card_errors_signal = card_errors;

    if deleting_signal().contains(&id) {
        return;
    }
    card_errors_signal.write().remove(&id);
    pending_signal.write().remove(&id);

    let Some(token) = (state.session)() else {
        return;
    };
    let Some(notes_api) = state.notes_api.read().clone() else {
        card_errors_signal
            .write()
            .insert(id, "Notes API is not configured.".to_string());
        return;
    };

    deleting_signal.write().insert(id.clone());
    spawn(async move {
        match notes_api.delete_note(&token, &id).await {
            Ok(()) => {
                remove_note(&mut notes_signal.write(), &id);
            }
            Err(delete_error) => {
                tracing::error!("Failed to delete note {}: {}", id, delete_error);
                card_errors_signal
                    .write()
                    .insert(id.clone(), delete_error.to_string());
            }
        }
        deleting_signal.write().remove(&id);
    });
}
