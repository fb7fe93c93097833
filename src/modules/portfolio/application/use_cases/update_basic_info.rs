use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::PortfolioStore;
use crate::modules::portfolio::domain::entities::{BasicInfo, Portfolio};

#[derive(Debug, Clone)]
pub enum UpdateBasicInfoError {
    NotFound,
    RepositoryError(String),
}

/// An interface for the update basic info use case
#[async_trait]
pub trait IUpdateBasicInfoUseCase: Send + Sync {
    async fn execute(
        &self,
        job_seeker_id: Uuid,
        basic_info: BasicInfo,
    ) -> Result<Portfolio, UpdateBasicInfoError>;
}

/// Wholesale replacement of the basic info section. There is no field-wise
/// patching: the caller always sends the complete section.
pub struct UpdateBasicInfoUseCase<S>
where
    S: PortfolioStore,
{
    portfolio_store: S,
}

impl<S> UpdateBasicInfoUseCase<S>
where
    S: PortfolioStore,
{
    pub fn new(portfolio_store: S) -> Self {
        Self { portfolio_store }
    }
}

#[async_trait]
impl<S> IUpdateBasicInfoUseCase for UpdateBasicInfoUseCase<S>
where
    S: PortfolioStore + Sync + Send,
{
    async fn execute(
        &self,
        job_seeker_id: Uuid,
        basic_info: BasicInfo,
    ) -> Result<Portfolio, UpdateBasicInfoError> {
        let mut portfolio = self
            .portfolio_store
            .find_by_job_seeker_id(job_seeker_id)
            .await
            .map_err(|e| UpdateBasicInfoError::RepositoryError(e.to_string()))?
            .ok_or(UpdateBasicInfoError::NotFound)?;

        portfolio.basic_info = basic_info;
        portfolio.mark_needs_embedding();
        portfolio.touch(Utc::now());

        self.portfolio_store
            .update(&portfolio)
            .await
            .map_err(|e| UpdateBasicInfoError::RepositoryError(e.to_string()))?;

        Ok(portfolio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::ports::outgoing::PortfolioStoreError;
    use std::sync::Mutex;
    use tokio;

    fn basic_info(name: &str) -> BasicInfo {
        BasicInfo {
            name: name.to_string(),
            school_name: "Seoul U".to_string(),
            major: "CS".to_string(),
            gpa: Some(3.5),
            desired_position: None,
            reference_urls: vec![],
            awards: vec![],
            certifications: vec![],
            language_tests: vec![],
        }
    }

    #[derive(Default)]
    struct MockPortfolioStore {
        pub portfolio: Option<Portfolio>,
        pub updated: Mutex<Option<Portfolio>>,
    }

    #[async_trait]
    impl PortfolioStore for MockPortfolioStore {
        async fn find_by_job_seeker_id(
            &self,
            _job_seeker_id: Uuid,
        ) -> Result<Option<Portfolio>, PortfolioStoreError> {
            Ok(self.portfolio.clone())
        }

        async fn exists_by_job_seeker_id(
            &self,
            _job_seeker_id: Uuid,
        ) -> Result<bool, PortfolioStoreError> {
            unimplemented!()
        }

        async fn insert(&self, _portfolio: &Portfolio) -> Result<(), PortfolioStoreError> {
            unimplemented!()
        }

        async fn update(&self, portfolio: &Portfolio) -> Result<(), PortfolioStoreError> {
            *self.updated.lock().unwrap() = Some(portfolio.clone());
            Ok(())
        }

        async fn delete(&self, _portfolio_id: Uuid) -> Result<(), PortfolioStoreError> {
            unimplemented!()
        }

        async fn find_by_job_seeker_ids(
            &self,
            _job_seeker_ids: &[Uuid],
        ) -> Result<Vec<Portfolio>, PortfolioStoreError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_update_basic_info_replaces_section_and_marks_dirty() {
        let job_seeker_id = Uuid::new_v4();
        let mut existing = Portfolio::new(job_seeker_id, basic_info("Old Name"), Utc::now());
        existing.processing_status.needs_embedding = false;

        let store = MockPortfolioStore {
            portfolio: Some(existing),
            ..Default::default()
        };
        let use_case = UpdateBasicInfoUseCase::new(store);

        let result = use_case.execute(job_seeker_id, basic_info("New Name")).await;

        let portfolio = result.unwrap();
        assert_eq!(portfolio.basic_info.name, "New Name");
        assert!(portfolio.processing_status.needs_embedding);

        let persisted = use_case.portfolio_store.updated.lock().unwrap().clone();
        assert_eq!(persisted.unwrap().basic_info.name, "New Name");
    }

    #[tokio::test]
    async fn test_update_basic_info_not_found() {
        let use_case = UpdateBasicInfoUseCase::new(MockPortfolioStore::default());

        let result = use_case.execute(Uuid::new_v4(), basic_info("Name")).await;

        assert!(matches!(result, Err(UpdateBasicInfoError::NotFound)));
    }
}
