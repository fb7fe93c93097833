// src/modules/search/application/ports/outgoing/candidate_search.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs (wire shape of the AI matching server)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub job_seeker_id: Uuid,
    pub match_score: f64,
    pub match_reason: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub status: String,
    pub candidates: Vec<CandidateMatch>,
    pub search_time: f64,
    pub total_results: i64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CandidateSearchError {
    /// The AI server could not be reached or answered with a failure.
    #[error("Search backend unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CandidateSearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchOutcome, CandidateSearchError>;
}
