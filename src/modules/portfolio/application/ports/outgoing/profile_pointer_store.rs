// src/modules/portfolio/application/ports/outgoing/profile_pointer_store.rs

use async_trait::async_trait;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// The slice of the relational profile row this service is allowed to touch.
/// `portfolio_id` is the cross-store back-reference; everything else on the
/// row belongs to the profile service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePointer {
    pub job_seeker_id: Uuid,
    pub portfolio_id: Option<Uuid>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfilePointerStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfilePointerStore: Send + Sync {
    /// Create a minimal profile row for the job seeker when none exists yet.
    /// Idempotent: an existing row is left untouched.
    async fn ensure_exists(&self, job_seeker_id: Uuid) -> Result<(), ProfilePointerStoreError>;

    async fn find_by_job_seeker_id(
        &self,
        job_seeker_id: Uuid,
    ) -> Result<Option<ProfilePointer>, ProfilePointerStoreError>;

    /// Write the pointer column. Only `portfolio_id` is persisted.
    async fn save(&self, pointer: ProfilePointer) -> Result<(), ProfilePointerStoreError>;
}
