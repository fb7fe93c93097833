use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioStore, PortfolioStoreError, ProfilePointerStore,
};
use crate::modules::portfolio::domain::entities::{BasicInfo, Portfolio};

#[derive(Debug, Clone)]
pub enum CreatePortfolioError {
    AlreadyExists,
    ProfileNotFound,
    RepositoryError(String),
}

/// An interface for the create portfolio use case
#[async_trait]
pub trait ICreatePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        job_seeker_id: Uuid,
        basic_info: BasicInfo,
    ) -> Result<Portfolio, CreatePortfolioError>;
}

/// Creates the portfolio document and wires the relational profile row's
/// back-reference to it. The two writes span two stores with no shared
/// transaction, so the pointer leg compensates by deleting the freshly
/// inserted document on failure: afterwards either both stores reference the
/// portfolio or neither does.
pub struct CreatePortfolioUseCase<S, P>
where
    S: PortfolioStore,
    P: ProfilePointerStore,
{
    portfolio_store: S,
    profile_pointer_store: P,
}

impl<S, P> CreatePortfolioUseCase<S, P>
where
    S: PortfolioStore,
    P: ProfilePointerStore,
{
    pub fn new(portfolio_store: S, profile_pointer_store: P) -> Self {
        Self {
            portfolio_store,
            profile_pointer_store,
        }
    }

    /// Single compensation attempt, no retries. Returns the failure message
    /// when the orphaned document could not be removed.
    async fn roll_back_document(&self, portfolio_id: Uuid) -> Result<(), String> {
        self.portfolio_store
            .delete(portfolio_id)
            .await
            .map_err(|e| e.to_string())
    }

    async fn fail_with_compensation(
        &self,
        portfolio_id: Uuid,
        original: CreatePortfolioError,
        original_msg: &str,
    ) -> CreatePortfolioError {
        match self.roll_back_document(portfolio_id).await {
            Ok(()) => original,
            Err(comp_err) => {
                error!(
                    portfolio_id = %portfolio_id,
                    error = %comp_err,
                    "compensation failed: orphaned portfolio document left behind"
                );
                CreatePortfolioError::RepositoryError(format!(
                    "{}; compensation failed: {}",
                    original_msg, comp_err
                ))
            }
        }
    }
}

#[async_trait]
impl<S, P> ICreatePortfolioUseCase for CreatePortfolioUseCase<S, P>
where
    S: PortfolioStore + Sync + Send,
    P: ProfilePointerStore + Sync + Send,
{
    async fn execute(
        &self,
        job_seeker_id: Uuid,
        basic_info: BasicInfo,
    ) -> Result<Portfolio, CreatePortfolioError> {
        let exists = self
            .portfolio_store
            .exists_by_job_seeker_id(job_seeker_id)
            .await
            .map_err(|e| CreatePortfolioError::RepositoryError(e.to_string()))?;

        if exists {
            return Err(CreatePortfolioError::AlreadyExists);
        }

        self.profile_pointer_store
            .ensure_exists(job_seeker_id)
            .await
            .map_err(|e| CreatePortfolioError::RepositoryError(e.to_string()))?;

        let portfolio = Portfolio::new(job_seeker_id, basic_info, Utc::now());

        // The unique index on job_seeker_id catches the insert that lost a
        // race past the pre-check above; both paths report AlreadyExists.
        self.portfolio_store
            .insert(&portfolio)
            .await
            .map_err(|e| match e {
                PortfolioStoreError::AlreadyExists => CreatePortfolioError::AlreadyExists,
                other => CreatePortfolioError::RepositoryError(other.to_string()),
            })?;

        let pointer = match self
            .profile_pointer_store
            .find_by_job_seeker_id(job_seeker_id)
            .await
        {
            Ok(Some(pointer)) => pointer,
            Ok(None) => {
                let msg = "job seeker profile missing after portfolio insert";
                return Err(self
                    .fail_with_compensation(
                        portfolio.id,
                        CreatePortfolioError::ProfileNotFound,
                        msg,
                    )
                    .await);
            }
            Err(e) => {
                let msg = e.to_string();
                return Err(self
                    .fail_with_compensation(
                        portfolio.id,
                        CreatePortfolioError::RepositoryError(msg.clone()),
                        &msg,
                    )
                    .await);
            }
        };

        let mut pointer = pointer;
        pointer.portfolio_id = Some(portfolio.id);

        if let Err(e) = self.profile_pointer_store.save(pointer).await {
            let msg = e.to_string();
            return Err(self
                .fail_with_compensation(
                    portfolio.id,
                    CreatePortfolioError::RepositoryError(msg.clone()),
                    &msg,
                )
                .await);
        }

        info!(job_seeker_id = %job_seeker_id, portfolio_id = %portfolio.id, "portfolio created");
        Ok(portfolio)
    }
}
