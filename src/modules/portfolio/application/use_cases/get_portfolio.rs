use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::PortfolioStore;
use crate::modules::portfolio::domain::entities::Portfolio;

#[derive(Debug, Clone)]
pub enum GetPortfolioError {
    NotFound,
    RepositoryError(String),
}

/// An interface for the get portfolio use case
#[async_trait]
pub trait IGetPortfolioUseCase: Send + Sync {
    async fn execute(&self, job_seeker_id: Uuid) -> Result<Portfolio, GetPortfolioError>;
}

pub struct GetPortfolioUseCase<S>
where
    S: PortfolioStore,
{
    portfolio_store: S,
}

impl<S> GetPortfolioUseCase<S>
where
    S: PortfolioStore,
{
    pub fn new(portfolio_store: S) -> Self {
        Self { portfolio_store }
    }
}

#[async_trait]
impl<S> IGetPortfolioUseCase for GetPortfolioUseCase<S>
where
    S: PortfolioStore + Sync + Send,
{
    async fn execute(&self, job_seeker_id: Uuid) -> Result<Portfolio, GetPortfolioError> {
        let mut portfolio = self
            .portfolio_store
            .find_by_job_seeker_id(job_seeker_id)
            .await
            .map_err(|e| GetPortfolioError::RepositoryError(e.to_string()))?
            .ok_or(GetPortfolioError::NotFound)?;

        // Display order is resolved at read time; stored order is sparse.
        portfolio.sort_items();
        Ok(portfolio)
    }
}
