use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::PortfolioStore;
use crate::modules::portfolio::domain::entities::Portfolio;
use crate::modules::search::application::ports::outgoing::{
    CandidateSearchClient, CandidateSearchError,
};

#[derive(Debug, Clone)]
pub enum SearchCandidatesError {
    SearchUnavailable(String),
    RepositoryError(String),
}

/// Profile summary attached to a search hit. Absent when the candidate has
/// no portfolio (stale index entry or deleted portfolio); the hit itself is
/// still returned.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateProfile {
    pub name: String,
    pub school_name: String,
    pub major: String,
    pub gpa: Option<f64>,
    pub awards_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrichedCandidate {
    pub job_seeker_id: Uuid,
    pub match_score: f64,
    pub match_reason: String,
    pub keywords: Vec<String>,
    pub profile: Option<CandidateProfile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchCandidatesResult {
    pub status: String,
    pub candidates: Vec<EnrichedCandidate>,
    pub search_time: f64,
    pub total_results: i64,
}

/// An interface for the candidate search use case
#[async_trait]
pub trait ISearchCandidatesUseCase: Send + Sync {
    async fn execute(&self, query: &str) -> Result<SearchCandidatesResult, SearchCandidatesError>;
}

/// Forwards the query to the AI matching server, then decorates each hit with
/// basic-info fields from the candidates' portfolios. Read-only: one batch
/// query regardless of result count, never per-candidate lookups.
pub struct SearchCandidatesUseCase<C, S>
where
    C: CandidateSearchClient,
    S: PortfolioStore,
{
    search_client: C,
    portfolio_store: S,
}

impl<C, S> SearchCandidatesUseCase<C, S>
where
    C: CandidateSearchClient,
    S: PortfolioStore,
{
    pub fn new(search_client: C, portfolio_store: S) -> Self {
        Self {
            search_client,
            portfolio_store,
        }
    }
}

fn profile_of(portfolio: &Portfolio) -> CandidateProfile {
    CandidateProfile {
        name: portfolio.basic_info.name.clone(),
        school_name: portfolio.basic_info.school_name.clone(),
        major: portfolio.basic_info.major.clone(),
        gpa: portfolio.basic_info.gpa,
        awards_count: portfolio.basic_info.awards.len(),
    }
}

#[async_trait]
impl<C, S> ISearchCandidatesUseCase for SearchCandidatesUseCase<C, S>
where
    C: CandidateSearchClient + Sync + Send,
    S: PortfolioStore + Sync + Send,
{
    async fn execute(&self, query: &str) -> Result<SearchCandidatesResult, SearchCandidatesError> {
        let outcome = self.search_client.search(query).await.map_err(|e| match e {
            CandidateSearchError::Unavailable(msg) => {
                SearchCandidatesError::SearchUnavailable(msg)
            }
            CandidateSearchError::InvalidResponse(msg) => {
                SearchCandidatesError::SearchUnavailable(msg)
            }
        })?;

        let mut ids: Vec<Uuid> = outcome
            .candidates
            .iter()
            .map(|c| c.job_seeker_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let profiles: HashMap<Uuid, CandidateProfile> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.portfolio_store
                .find_by_job_seeker_ids(&ids)
                .await
                .map_err(|e| SearchCandidatesError::RepositoryError(e.to_string()))?
                .iter()
                .map(|p| (p.job_seeker_id, profile_of(p)))
                .collect()
        };

        let candidates = outcome
            .candidates
            .into_iter()
            .map(|c| EnrichedCandidate {
                profile: profiles.get(&c.job_seeker_id).cloned(),
                job_seeker_id: c.job_seeker_id,
                match_score: c.match_score,
                match_reason: c.match_reason,
                keywords: c.keywords,
            })
            .collect();

        Ok(SearchCandidatesResult {
            status: outcome.status,
            candidates,
            search_time: outcome.search_time,
            total_results: outcome.total_results,
        })
    }
}
