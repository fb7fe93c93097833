use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::PortfolioStore;
use crate::modules::portfolio::domain::entities::{Portfolio, ReorderError};

#[derive(Debug, Clone)]
pub enum ReorderItemsError {
    PortfolioNotFound,
    UnknownItemId(String),
    RepositoryError(String),
}

/// An interface for the reorder portfolio items use case
#[async_trait]
pub trait IReorderItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        job_seeker_id: Uuid,
        ordered_item_ids: Vec<String>,
    ) -> Result<Portfolio, ReorderItemsError>;
}

/// Renumbers items densely (1-based) in the caller-supplied sequence.
/// Reordering is a presentation concern: unlike every other mutation it does
/// NOT raise the re-embedding flag, since the indexed content is unchanged.
pub struct ReorderItemsUseCase<S>
where
    S: PortfolioStore,
{
    portfolio_store: S,
}

impl<S> ReorderItemsUseCase<S>
where
    S: PortfolioStore,
{
    pub fn new(portfolio_store: S) -> Self {
        Self { portfolio_store }
    }
}

#[async_trait]
impl<S> IReorderItemsUseCase for ReorderItemsUseCase<S>
where
    S: PortfolioStore + Sync + Send,
{
    async fn execute(
        &self,
        job_seeker_id: Uuid,
        ordered_item_ids: Vec<String>,
    ) -> Result<Portfolio, ReorderItemsError> {
        let mut portfolio = self
            .portfolio_store
            .find_by_job_seeker_id(job_seeker_id)
            .await
            .map_err(|e| ReorderItemsError::RepositoryError(e.to_string()))?
            .ok_or(ReorderItemsError::PortfolioNotFound)?;

        portfolio
            .apply_reorder(&ordered_item_ids)
            .map_err(|ReorderError::UnknownItemId(id)| ReorderItemsError::UnknownItemId(id))?;

        portfolio.touch(Utc::now());

        self.portfolio_store
            .update(&portfolio)
            .await
            .map_err(|e| ReorderItemsError::RepositoryError(e.to_string()))?;

        portfolio.sort_items();
        Ok(portfolio)
    }
}
