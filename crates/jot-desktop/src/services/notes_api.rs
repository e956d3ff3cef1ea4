//! Notes API service for desktop note operations.

use jot_core::notes::{NotesApiClient, NotesResult};
use jot_core::{ClientConfig, Note, NoteDraft, NoteId, NoteUpdate, UploadTarget};

#[derive(Debug, Clone)]
pub struct NotesApiService {
    inner: NotesApiClient,
}

impl NotesApiService {
    pub fn new(config: &ClientConfig) -> NotesResult<Self> {
        Ok(Self {
            inner: NotesApiClient::new(config)?,
        })
    }

    pub async fn list_notes(&self, token: &str) -> NotesResult<Vec<Note>> {
        self.inner.list_notes(token).await
    }

    pub async fn create_note(&self, token: &str, draft: &NoteDraft) -> NotesResult<Note> {
        self.inner.create_note(token, draft).await
    }

    pub async fn update_note(
        &self,
        token: &str,
        id: &NoteId,
        update: &NoteUpdate,
    ) -> NotesResult<Note> {
        self.inner.update_note(token, id, update).await
    }

    pub async fn delete_note(&self, token: &str, id: &NoteId) -> NotesResult<()> {
        self.inner.delete_note(token, id).await
    }

    pub async fn request_upload_target(&self, token: &str) -> NotesResult<UploadTarget> {
        self.inner.request_upload_target(token).await
    }

    pub async fn put_attachment(
        &self,
        target: &UploadTarget,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> NotesResult<()> {
        self.inner.put_attachment(target, content_type, bytes).await
    }
}
