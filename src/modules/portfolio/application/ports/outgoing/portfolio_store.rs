// src/modules/portfolio/application/ports/outgoing/portfolio_store.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::domain::entities::Portfolio;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioStoreError {
    #[error("Portfolio not found")]
    NotFound,

    /// Unique index on `job_seeker_id` violated at INSERT time.
    #[error("Portfolio already exists for this job seeker")]
    AlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (owned document store, whole-aggregate reads and writes)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    async fn find_by_job_seeker_id(
        &self,
        job_seeker_id: Uuid,
    ) -> Result<Option<Portfolio>, PortfolioStoreError>;

    async fn exists_by_job_seeker_id(
        &self,
        job_seeker_id: Uuid,
    ) -> Result<bool, PortfolioStoreError>;

    /// Persist a new aggregate as-is (id chosen by the caller).
    /// A concurrent insert for the same job seeker surfaces as `AlreadyExists`.
    async fn insert(&self, portfolio: &Portfolio) -> Result<(), PortfolioStoreError>;

    /// Whole-document replace keyed by portfolio id.
    async fn update(&self, portfolio: &Portfolio) -> Result<(), PortfolioStoreError>;

    async fn delete(&self, portfolio_id: Uuid) -> Result<(), PortfolioStoreError>;

    /// Batch read for search enrichment. Missing ids are simply absent from
    /// the result; never an error.
    async fn find_by_job_seeker_ids(
        &self,
        job_seeker_ids: &[Uuid],
    ) -> Result<Vec<Portfolio>, PortfolioStoreError>;
}
