use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::{
    AttachmentStorage, PortfolioStore,
};

#[derive(Debug, Clone)]
pub enum DeleteItemError {
    PortfolioNotFound,
    ItemNotFound,
    RepositoryError(String),
}

/// An interface for the delete portfolio item use case
#[async_trait]
pub trait IDeleteItemUseCase: Send + Sync {
    async fn execute(&self, job_seeker_id: Uuid, item_id: &str) -> Result<(), DeleteItemError>;
}

/// Removes an item and its stored attachments. The attachment delete is
/// best-effort: a storage failure is logged and the item is removed anyway,
/// so the document never keeps referencing files the user asked to delete.
pub struct DeleteItemUseCase<S, F>
where
    S: PortfolioStore,
    F: AttachmentStorage,
{
    portfolio_store: S,
    attachment_storage: F,
}

impl<S, F> DeleteItemUseCase<S, F>
where
    S: PortfolioStore,
    F: AttachmentStorage,
{
    pub fn new(portfolio_store: S, attachment_storage: F) -> Self {
        Self {
            portfolio_store,
            attachment_storage,
        }
    }
}

#[async_trait]
impl<S, F> IDeleteItemUseCase for DeleteItemUseCase<S, F>
where
    S: PortfolioStore + Sync + Send,
    F: AttachmentStorage + Sync + Send,
{
    async fn execute(&self, job_seeker_id: Uuid, item_id: &str) -> Result<(), DeleteItemError> {
        let mut portfolio = self
            .portfolio_store
            .find_by_job_seeker_id(job_seeker_id)
            .await
            .map_err(|e| DeleteItemError::RepositoryError(e.to_string()))?
            .ok_or(DeleteItemError::PortfolioNotFound)?;

        let object_keys: Vec<String> = portfolio
            .item(item_id)
            .ok_or(DeleteItemError::ItemNotFound)?
            .attachments
            .iter()
            .map(|a| a.object_key.clone())
            .collect();

        if !object_keys.is_empty() {
            if let Err(e) = self.attachment_storage.delete_many(&object_keys).await {
                warn!(
                    item_id = %item_id,
                    error = %e,
                    "attachment cleanup failed, removing item anyway"
                );
            }
        }

        portfolio.remove_item(item_id);
        portfolio.mark_needs_embedding();
        portfolio.touch(Utc::now());

        self.portfolio_store
            .update(&portfolio)
            .await
            .map_err(|e| DeleteItemError::RepositoryError(e.to_string()))
    }
}
