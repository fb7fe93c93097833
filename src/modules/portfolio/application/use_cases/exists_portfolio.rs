use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::PortfolioStore;

#[derive(Debug, Clone)]
pub enum ExistsPortfolioError {
    RepositoryError(String),
}

/// An interface for the portfolio existence check use case
#[async_trait]
pub trait IExistsPortfolioUseCase: Send + Sync {
    async fn execute(&self, job_seeker_id: Uuid) -> Result<bool, ExistsPortfolioError>;
}

pub struct ExistsPortfolioUseCase<S>
where
    S: PortfolioStore,
{
    portfolio_store: S,
}

impl<S> ExistsPortfolioUseCase<S>
where
    S: PortfolioStore,
{
    pub fn new(portfolio_store: S) -> Self {
        Self { portfolio_store }
    }
}

#[async_trait]
impl<S> IExistsPortfolioUseCase for ExistsPortfolioUseCase<S>
where
    S: PortfolioStore + Sync + Send,
{
    async fn execute(&self, job_seeker_id: Uuid) -> Result<bool, ExistsPortfolioError> {
        self.portfolio_store
            .exists_by_job_seeker_id(job_seeker_id)
            .await
            .map_err(|e| ExistsPortfolioError::RepositoryError(e.to_string()))
    }
}
