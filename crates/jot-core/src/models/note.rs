//! Note model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A unique identifier for a note.
///
/// Ids are opaque strings assigned by the server; the client never mints one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A note as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, server-assigned
    pub id: NoteId,
    /// Note title
    pub title: String,
    /// Note body
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Storage key of the attachment, if one was uploaded at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_s3_key: Option<String>,
    /// Server-computed URL for rendering the attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

/// Local validation failures, caught before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Content is required")]
    EmptyContent,
}

/// Payload for creating a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_s3_key: Option<String>,
}

impl NoteDraft {
    /// Check that title and content are non-empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_note_fields(&self.title, &self.content)
    }
}

/// Payload for updating a note's title and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteUpdate {
    pub title: String,
    pub content: String,
}

impl NoteUpdate {
    /// Check that title and content are non-empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_note_fields(&self.title, &self.content)
    }
}

fn validate_note_fields(title: &str, content: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(())
}

/// A write-capable upload target issued by the server for one attachment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadTarget {
    #[serde(rename = "uploadUrl")]
    pub upload_url: String,
    #[serde(rename = "s3Key")]
    pub s3_key: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn note_round_trips_through_json() {
        let raw = r#"{
            "id": "n-123",
            "title": "Groceries",
            "content": "Eggs, milk",
            "created_at": "2024-05-04T12:30:00Z",
            "attachment_s3_key": "uploads/n-123/list.png",
            "attachment_url": "https://cdn.example.com/uploads/n-123/list.png"
        }"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(note.id, NoteId::from("n-123"));
        assert_eq!(note.title, "Groceries");
        assert_eq!(
            note.attachment_s3_key.as_deref(),
            Some("uploads/n-123/list.png")
        );
    }

    #[test]
    fn note_attachment_fields_default_to_none() {
        let raw = r#"{
            "id": "n-1",
            "title": "t",
            "content": "c",
            "created_at": "2024-05-04T12:30:00Z"
        }"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(note.attachment_s3_key, None);
        assert_eq!(note.attachment_url, None);
    }

    #[test]
    fn draft_rejects_blank_fields() {
        let draft = NoteDraft {
            title: "   ".to_string(),
            content: "body".to_string(),
            attachment_s3_key: None,
        };
        assert_eq!(draft.validate(), Err(ValidationError::EmptyTitle));

        let draft = NoteDraft {
            title: "title".to_string(),
            content: "".to_string(),
            attachment_s3_key: None,
        };
        assert_eq!(draft.validate(), Err(ValidationError::EmptyContent));
    }

    #[test]
    fn draft_serializes_without_absent_attachment_key() {
        let draft = NoteDraft {
            title: "t".to_string(),
            content: "c".to_string(),
            attachment_s3_key: None,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json.get("attachment_s3_key"), None);
    }

    #[test]
    fn upload_target_uses_camel_case_wire_names() {
        let raw = r#"{"uploadUrl": "https://bucket.example.com/put", "s3Key": "uploads/abc"}"#;
        let target: UploadTarget = serde_json::from_str(raw).unwrap();
        assert_eq!(target.upload_url, "https://bucket.example.com/put");
        assert_eq!(target.s3_key, "uploads/abc");
    }
}
