//! Note creation form with optional image attachment.

use std::time::Duration;

use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use jot_core::notes::{advance_attachment_phase, AttachmentEvent, AttachmentPhase};
use jot_core::{Note, NoteDraft};

use super::button::{Button, ButtonVariant};
use super::input::Input;
use crate::state::AppState;
use crate::theme;

/// How long the creation confirmation stays visible
const SUCCESS_MESSAGE_MS: u64 = 4000;

/// A file selected for upload, read eagerly at pick time.
#[derive(Clone)]
struct PickedFile {
    name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

#[component]
pub fn NoteForm(on_created: EventHandler<Note>) -> Element {
    let state = use_context::<AppState>();
    let colors = theme::palette();

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let picked_file = use_signal(|| None::<PickedFile>);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let success_version = use_signal(|| 0u64);
    let mut busy = use_signal(|| false);
    let mut phase = use_signal(AttachmentPhase::default);

    let on_pick_attachment = move |_: MouseEvent| {
        if busy() {
            return;
        }
        error.set(None);

        let mut picked_file_signal = picked_file;
        let mut error_signal = error;
        spawn(async move {
            let Some(file) = AsyncFileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
                .pick_file()
                .await
            else {
                return;
            };
            let file_name = file.file_name();
            if file_name.trim().is_empty() {
                error_signal.set(Some("Selected file has an empty filename.".to_string()));
                return;
            }

            let bytes = file.read().await;
            let content_type = mime_guess::from_path(&file_name)
                .first_raw()
                .map(str::to_string);
            picked_file_signal.set(Some(PickedFile {
                name: file_name,
                content_type,
                bytes,
            }));
        });
    };

    let mut picked_file_for_clear = picked_file;
    let on_clear_attachment = move |_: MouseEvent| {
        picked_file_for_clear.set(None);
    };

    let submit = move |_: MouseEvent| {
        if busy() {
            return;
        }
        error.set(None);
        success.set(None);

        let draft = NoteDraft {
            title: title(),
            content: content(),
            attachment_s3_key: None,
        };
        if let Err(validation) = draft.validate() {
            error.set(Some(validation.to_string()));
            return;
        }
        let Some(token) = (state.session)() else {
            return;
        };
        let Some(notes_api) = state.notes_api.read().clone() else {
            error.set(Some("Notes API is not configured.".to_string()));
            return;
        };
        let file = picked_file.read().clone();

        busy.set(true);
        phase.set(AttachmentPhase::NoAttachment);

        let mut title_signal = title;
        let mut content_signal = content;
        let mut picked_file_signal = picked_file;
        let mut error_signal = error;
        let mut success_signal = success;
        let mut success_version_signal = success_version;
        let mut busy_signal = busy;
        let mut phase_signal = phase;
        spawn(async move {
            let mut draft = draft;

            // Two-phase upload: request a write-capable target, then transfer
            // the raw bytes. A failure at either phase aborts the creation.
            if let Some(file) = file {
                let target = match notes_api.request_upload_target(&token).await {
                    Ok(target) => {
                        phase_signal.set(advance_attachment_phase(
                            phase_signal(),
                            AttachmentEvent::TargetIssued,
                        ));
                        target
                    }
                    Err(upload_error) => {
                        tracing::error!("Upload target request failed: {}", upload_error);
                        error_signal.set(Some(upload_error.to_string()));
                        phase_signal.set(advance_attachment_phase(
                            phase_signal(),
                            AttachmentEvent::Aborted,
                        ));
                        busy_signal.set(false);
                        return;
                    }
                };

                if let Err(transfer_error) = notes_api
                    .put_attachment(&target, file.content_type.as_deref(), file.bytes)
                    .await
                {
                    tracing::error!("Attachment transfer failed: {}", transfer_error);
                    error_signal.set(Some(transfer_error.to_string()));
                    phase_signal.set(advance_attachment_phase(
                        phase_signal(),
                        AttachmentEvent::Aborted,
                    ));
                    busy_signal.set(false);
                    return;
                }
                phase_signal.set(advance_attachment_phase(
                    phase_signal(),
                    AttachmentEvent::TransferCompleted,
                ));
                draft.attachment_s3_key = Some(target.s3_key);
            }

            match notes_api.create_note(&token, &draft).await {
                Ok(note) => {
                    phase_signal.set(advance_attachment_phase(
                        phase_signal(),
                        AttachmentEvent::KeyReferenced,
                    ));
                    on_created.call(note);
                    title_signal.set(String::new());
                    content_signal.set(String::new());
                    picked_file_signal.set(None);
                    phase_signal.set(AttachmentPhase::NoAttachment);

                    success_version_signal.set(success_version_signal() + 1);
                    let version = success_version_signal();
                    success_signal.set(Some("Note created.".to_string()));
                    spawn(async move {
                        tokio::time::sleep(Duration::from_millis(SUCCESS_MESSAGE_MS)).await;
                        if success_version_signal() == version {
                            success_signal.set(None);
                        }
                    });
                }
                Err(create_error) => {
                    // A create failure after a successful transfer leaves the
                    // uploaded object orphaned; the form stays populated so
                    // the user can resubmit.
                    tracing::error!("Note creation failed: {}", create_error);
                    error_signal.set(Some(create_error.to_string()));
                    phase_signal.set(advance_attachment_phase(
                        phase_signal(),
                        AttachmentEvent::Aborted,
                    ));
                }
            }
            busy_signal.set(false);
        });
    };

    let picked_name = picked_file.read().as_ref().map(|file| file.name.clone());
    let status = if busy() {
        Some(creation_status(phase(), picked_name.is_some()))
    } else {
        None
    };

    rsx! {
        div {
            class: "note-form",
            style: "
                border: 1px solid {colors.border};
                border-radius: 8px;
                padding: 16px;
                background: {colors.bg_secondary};
                display: flex;
                flex-direction: column;
                gap: 10px;
            ",

            div {
                style: "font-weight: 600;",
                "Create a note"
            }

            Input {
                value: title(),
                placeholder: "Title",
                disabled: busy(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
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
                placeholder: "Write your note here...",
                value: "{content}",
                disabled: busy(),
                oninput: move |evt: FormEvent| content.set(evt.value()),
            }

            div {
                style: "display: flex; align-items: center; gap: 8px;",
                if let Some(name) = picked_name {
                    span {
                        style: "font-size: 12px; color: {colors.text_secondary};",
                        "{name}"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: busy(),
                        onclick: on_clear_attachment,
                        "Remove"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: busy(),
                        onclick: on_pick_attachment,
                        "+ Attach image"
                    }
                }
            }

            if let Some(status) = status {
                div {
                    style: "font-size: 12px; color: {colors.text_muted};",
                    "{status}"
                }
            }
            if let Some(error) = error() {
                div {
                    style: "font-size: 12px; color: {colors.error};",
                    "{error}"
                }
            }
            if let Some(message) = success() {
                div {
                    style: "font-size: 12px; color: {colors.success};",
                    "{message}"
                }
            }

            div {
                Button {
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Saving..." } else { "Save note" }
                }
            }
        }
    }
}

/// Status line for a creation in flight.
fn creation_status(phase: AttachmentPhase, has_attachment: bool) -> &'static str {
    if !has_attachment {
        return "Saving note...";
    }
    match phase {
        AttachmentPhase::NoAttachment => "Requesting upload target...",
        AttachmentPhase::UrlRequested => "Transferring attachment...",
        AttachmentPhase::Uploaded | AttachmentPhase::Referenced => "Saving note...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_status_follows_upload_phases() {
        assert_eq!(
            creation_status(AttachmentPhase::NoAttachment, true),
            "Requesting upload target..."
        );
        assert_eq!(
            creation_status(AttachmentPhase::UrlRequested, true),
            "Transferring attachment..."
        );
        assert_eq!(creation_status(AttachmentPhase::Uploaded, true), "Saving note...");
        assert_eq!(creation_status(AttachmentPhase::NoAttachment, false), "Saving note...");
    }
}
