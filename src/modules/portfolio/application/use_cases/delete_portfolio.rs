use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::{
    AttachmentStorage, PortfolioStore, ProfilePointerStore,
};

#[derive(Debug, Clone)]
pub enum DeletePortfolioError {
    NotFound,
    RepositoryError(String),
}

/// An interface for the delete portfolio use case
#[async_trait]
pub trait IDeletePortfolioUseCase: Send + Sync {
    async fn execute(&self, job_seeker_id: Uuid) -> Result<(), DeletePortfolioError>;
}

/// Tears down the whole aggregate. Only the document delete itself is strict;
/// attachment cleanup and the profile pointer clear are best-effort: their
/// failures are logged and the operation still succeeds, because a deleted
/// document with a stale pointer is recoverable while a half-deleted
/// document is not.
pub struct DeletePortfolioUseCase<S, P, F>
where
    S: PortfolioStore,
    P: ProfilePointerStore,
    F: AttachmentStorage,
{
    portfolio_store: S,
    profile_pointer_store: P,
    attachment_storage: F,
}

impl<S, P, F> DeletePortfolioUseCase<S, P, F>
where
    S: PortfolioStore,
    P: ProfilePointerStore,
    F: AttachmentStorage,
{
    pub fn new(portfolio_store: S, profile_pointer_store: P, attachment_storage: F) -> Self {
        Self {
            portfolio_store,
            profile_pointer_store,
            attachment_storage,
        }
    }

    async fn clear_pointer(&self, job_seeker_id: Uuid) {
        match self
            .profile_pointer_store
            .find_by_job_seeker_id(job_seeker_id)
            .await
        {
            Ok(Some(mut pointer)) => {
                pointer.portfolio_id = None;
                if let Err(e) = self.profile_pointer_store.save(pointer).await {
                    warn!(
                        job_seeker_id = %job_seeker_id,
                        error = %e,
                        "failed to clear profile portfolio pointer"
                    );
                }
            }
            Ok(None) => {
                warn!(
                    job_seeker_id = %job_seeker_id,
                    "no profile row found while clearing portfolio pointer"
                );
            }
            Err(e) => {
                warn!(
                    job_seeker_id = %job_seeker_id,
                    error = %e,
                    "profile lookup failed while clearing portfolio pointer"
                );
            }
        }
    }
}

#[async_trait]
impl<S, P, F> IDeletePortfolioUseCase for DeletePortfolioUseCase<S, P, F>
where
    S: PortfolioStore + Sync + Send,
    P: ProfilePointerStore + Sync + Send,
    F: AttachmentStorage + Sync + Send,
{
    async fn execute(&self, job_seeker_id: Uuid) -> Result<(), DeletePortfolioError> {
        let portfolio = self
            .portfolio_store
            .find_by_job_seeker_id(job_seeker_id)
            .await
            .map_err(|e| DeletePortfolioError::RepositoryError(e.to_string()))?
            .ok_or(DeletePortfolioError::NotFound)?;

        for item in &portfolio.items {
            let keys: Vec<String> = item
                .attachments
                .iter()
                .map(|a| a.object_key.clone())
                .collect();
            if keys.is_empty() {
                continue;
            }
            if let Err(e) = self.attachment_storage.delete_many(&keys).await {
                warn!(
                    item_id = %item.id,
                    error = %e,
                    "attachment cleanup failed during portfolio deletion"
                );
            }
        }

        self.portfolio_store
            .delete(portfolio.id)
            .await
            .map_err(|e| DeletePortfolioError::RepositoryError(e.to_string()))?;

        self.clear_pointer(job_seeker_id).await;

        info!(job_seeker_id = %job_seeker_id, portfolio_id = %portfolio.id, "portfolio deleted");
        Ok(())
    }
}
