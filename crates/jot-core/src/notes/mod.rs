//! Notes API client.
//!
//! Authenticated CRUD over the user's notes plus the two-phase attachment
//! upload: request a write-capable target from the backend, then transfer the
//! raw bytes directly to it. Every call attaches the bearer token issued at
//! sign-in.

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::models::{Note, NoteDraft, NoteId, NoteUpdate, UploadTarget, ValidationError};
use crate::util::compact_text;

#[derive(Debug, Error)]
pub enum NotesApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Notes API error: {0}")]
    Api(String),
    #[error("Attachment transfer failed: {0}")]
    Transfer(String),
}

pub type NotesResult<T> = Result<T, NotesApiError>;

#[derive(Debug, Clone)]
pub struct NotesApiClient {
    base_url: String,
    client: Client,
}

impl NotesApiClient {
    pub fn new(config: &ClientConfig) -> NotesResult<Self> {
        Ok(Self {
            base_url: config.api_base_url.clone(),
            client: Client::builder().build()?,
        })
    }

    /// Fetch the full note collection, newest first.
    pub async fn list_notes(&self, token: &str) -> NotesResult<Vec<Note>> {
        tracing::debug!("Fetching notes from {}", self.base_url);
        let response = self
            .client
            .get(format!("{}/notes", self.base_url))
            .bearer_auth(token)
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Vec<Note>>().await?)
    }

    /// Create a note; the server assigns the id and echoes the stored note.
    pub async fn create_note(&self, token: &str, draft: &NoteDraft) -> NotesResult<Note> {
        draft.validate()?;

        let response = self
            .client
            .post(format!("{}/notes", self.base_url))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Note>().await?)
    }

    /// Replace a note's title and content; returns the server's copy.
    pub async fn update_note(
        &self,
        token: &str,
        id: &NoteId,
        update: &NoteUpdate,
    ) -> NotesResult<Note> {
        update.validate()?;

        let response = self
            .client
            .put(self.note_url(id))
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Note>().await?)
    }

    pub async fn delete_note(&self, token: &str, id: &NoteId) -> NotesResult<()> {
        let response = self
            .client
            .delete(self.note_url(id))
            .bearer_auth(token)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Request a write-capable upload target for one attachment.
    pub async fn request_upload_target(&self, token: &str) -> NotesResult<UploadTarget> {
        tracing::debug!("Requesting attachment upload target");
        let response = self
            .client
            .post(format!("{}/notes/generate-upload-url", self.base_url))
            .bearer_auth(token)
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<UploadTarget>().await?)
    }

    /// Transfer raw attachment bytes to a previously issued target.
    ///
    /// The target URL carries its own authorization; the bearer token is not
    /// attached here.
    pub async fn put_attachment(
        &self,
        target: &UploadTarget,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> NotesResult<()> {
        let mut request = self.client.put(&target.upload_url);
        if let Some(content_type) = content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        let response = request
            .body(bytes)
            .send()
            .await
            .map_err(|error| NotesApiError::Transfer(error.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(NotesApiError::Transfer(format!(
                "HTTP {status}: {}",
                compact_text(&body)
            )));
        }
        Ok(())
    }

    fn note_url(&self, id: &NoteId) -> String {
        format!(
            "{}/notes/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        )
    }
}

/// Progress of a note creation that carries an attachment.
///
/// The phases are strictly ordered; a failure at any point abandons the whole
/// creation and the next attempt starts over from `NoAttachment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentPhase {
    /// No upload in progress (or none requested)
    #[default]
    NoAttachment,
    /// The server issued an upload target
    UrlRequested,
    /// The raw bytes were transferred to the target
    Uploaded,
    /// The create call referenced the storage key
    Referenced,
}

/// Events observed while creating a note with an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentEvent {
    TargetIssued,
    TransferCompleted,
    KeyReferenced,
    Aborted,
}

/// Advance the upload phase machine; out-of-order events leave it unchanged.
#[must_use]
pub fn advance_attachment_phase(
    phase: AttachmentPhase,
    event: AttachmentEvent,
) -> AttachmentPhase {
    match (phase, event) {
        (_, AttachmentEvent::Aborted) => AttachmentPhase::NoAttachment,
        (AttachmentPhase::NoAttachment, AttachmentEvent::TargetIssued) => {
            AttachmentPhase::UrlRequested
        }
        (AttachmentPhase::UrlRequested, AttachmentEvent::TransferCompleted) => {
            AttachmentPhase::Uploaded
        }
        (AttachmentPhase::Uploaded, AttachmentEvent::KeyReferenced) => AttachmentPhase::Referenced,
        (phase, _) => phase,
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: Option<String>,
}

async fn check_status(response: Response) -> NotesResult<Response> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(NotesApiError::Api(parse_api_error(status, &body)));
    }
    Ok(response)
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(message) = payload.message {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", compact_text(trimmed), status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::ValidationError;

    #[test]
    fn attachment_phase_advances_in_order() {
        let phase = AttachmentPhase::NoAttachment;
        let phase = advance_attachment_phase(phase, AttachmentEvent::TargetIssued);
        assert_eq!(phase, AttachmentPhase::UrlRequested);
        let phase = advance_attachment_phase(phase, AttachmentEvent::TransferCompleted);
        assert_eq!(phase, AttachmentPhase::Uploaded);
        let phase = advance_attachment_phase(phase, AttachmentEvent::KeyReferenced);
        assert_eq!(phase, AttachmentPhase::Referenced);
    }

    #[test]
    fn attachment_phase_ignores_out_of_order_events() {
        assert_eq!(
            advance_attachment_phase(AttachmentPhase::NoAttachment, AttachmentEvent::KeyReferenced),
            AttachmentPhase::NoAttachment
        );
        assert_eq!(
            advance_attachment_phase(
                AttachmentPhase::UrlRequested,
                AttachmentEvent::KeyReferenced
            ),
            AttachmentPhase::UrlRequested
        );
    }

    #[test]
    fn attachment_phase_abort_resets_from_any_phase() {
        for phase in [
            AttachmentPhase::UrlRequested,
            AttachmentPhase::Uploaded,
            AttachmentPhase::Referenced,
        ] {
            assert_eq!(
                advance_attachment_phase(phase, AttachmentEvent::Aborted),
                AttachmentPhase::NoAttachment
            );
        }
    }

    #[test]
    fn parse_api_error_prefers_server_message() {
        assert_eq!(
            parse_api_error(StatusCode::NOT_FOUND, r#"{"message": "Note not found"}"#),
            "Note not found (404)"
        );
        assert_eq!(parse_api_error(StatusCode::FORBIDDEN, "not json"), "not json (403)");
        assert_eq!(parse_api_error(StatusCode::BAD_GATEWAY, ""), "HTTP 502");
    }

    #[test]
    fn create_rejects_invalid_draft_before_any_request() {
        let draft = NoteDraft {
            title: String::new(),
            content: "body".to_string(),
            attachment_s3_key: None,
        };
        assert_eq!(draft.validate(), Err(ValidationError::EmptyTitle));
    }
}
