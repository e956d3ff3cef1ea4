//! Note card component

use chrono::Local;
use dioxus::prelude::*;

use jot_core::Note;

use super::button::{Button, ButtonVariant};
use super::input::Input;
use crate::theme;

/// A single note rendered in the dashboard list.
///
/// The card is either viewing or editing, and independently may carry a
/// pending delete confirmation; the owning view keys both states by note id.
#[component]
pub fn NoteCard(
    note: Note,
    editing: bool,
    pending_delete: bool,
    saving: bool,
    deleting: bool,
    error: Option<String>,
    edit_title: String,
    edit_content: String,
    on_edit_title: EventHandler<String>,
    on_edit_content: EventHandler<String>,
    on_start_edit: EventHandler<MouseEvent>,
    on_cancel_edit: EventHandler<MouseEvent>,
    on_save: EventHandler<MouseEvent>,
    on_delete_intent: EventHandler<MouseEvent>,
    on_cancel_delete: EventHandler<MouseEvent>,
    on_confirm_delete: EventHandler<MouseEvent>,
) -> Element {
    let colors = theme::palette();
    let created_label = note
        .created_at
        .with_timezone(&Local)
        .format("%b %e, %Y %H:%M")
        .to_string();

    rsx! {
        div {
            class: "note-card",
            style: "
                border: 1px solid {colors.border};
                border-radius: 8px;
                padding: 14px 16px;
                background: {colors.bg_primary};
                display: flex;
                flex-direction: column;
                gap: 8px;
            ",

            if editing {
                Input {
                    value: edit_title,
                    placeholder: "Title",
                    disabled: saving,
                    oninput: move |evt: FormEvent| on_edit_title.call(evt.value()),
                }
                textarea {
                    style: "
                        padding: 7px 10px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        resize: vertical;
                        font-family: inherit;
                        font-size: 13px;
                        color: {colors.text_primary};
                        background: {colors.bg_primary};
                    ",
                    rows: "4",
                    value: "{edit_content}",
                    disabled: saving,
                    oninput: move |evt: FormEvent| on_edit_content.call(evt.value()),
                }
                div {
                    style: "display: flex; gap: 8px;",
                    Button {
                        disabled: saving,
                        onclick: move |evt| on_save.call(evt),
                        if saving { "Saving..." } else { "Save" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: saving,
                        onclick: move |evt| on_cancel_edit.call(evt),
                        "Cancel"
                    }
                }
            } else {
                div {
                    class: "note-title",
                    style: "font-weight: 600; color: {colors.text_primary};",
                    "{note.title}"
                }
                div {
                    style: "white-space: pre-wrap; color: {colors.text_primary};",
                    "{note.content}"
                }
                if let Some(url) = &note.attachment_url {
                    img {
                        src: "{url}",
                        style: "
                            max-width: 320px;
                            border-radius: 6px;
                            border: 1px solid {colors.border_light};
                        ",
                    }
                }
                div {
                    style: "font-size: 12px; color: {colors.text_muted};",
                    "Created {created_label}"
                }
                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    if deleting {
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: true,
                            onclick: move |_| {},
                            "Deleting..."
                        }
                    } else if pending_delete {
                        span {
                            style: "font-size: 12px; color: {colors.error};",
                            "Delete this note?"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |evt| on_confirm_delete.call(evt),
                            "Confirm"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |evt| on_cancel_delete.call(evt),
                            "Cancel"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |evt| on_start_edit.call(evt),
                            "Edit"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |evt| on_delete_intent.call(evt),
                            "Delete"
                        }
                    }
                }
            }

            if let Some(error) = error {
                div {
                    style: "font-size: 12px; color: {colors.error};",
                    "{error}"
                }
            }
        }
    }
}
