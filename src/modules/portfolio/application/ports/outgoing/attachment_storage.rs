// src/modules/portfolio/application/ports/outgoing/attachment_storage.rs

use async_trait::async_trait;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// An uploaded file as received from the client, bytes already buffered.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttachmentStorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (object storage gateway)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AttachmentStorage: Send + Sync {
    /// Store the file under a fresh object key namespaced by owner.
    /// Returns the object key; the key is opaque to callers.
    async fn upload(
        &self,
        owner_id: Uuid,
        file: &UploadFile,
    ) -> Result<String, AttachmentStorageError>;

    /// Best-effort bulk delete. Keys that no longer exist are not errors;
    /// the first transport-level failure is reported after attempting all
    /// keys.
    async fn delete_many(&self, object_keys: &[String]) -> Result<(), AttachmentStorageError>;
}
