use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::modules::search::application::ports::outgoing::candidate_search::{
    CandidateMatch, CandidateSearchClient, CandidateSearchError, SearchOutcome,
};

// ============================================================================
// Wire types (AI matching server speaks camelCase JSON)
// ============================================================================

#[derive(Debug, Serialize)]
struct WireSearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCandidate {
    user_id: String,
    match_score: f64,
    match_reason: String,
    #[serde(default)]
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSearchResponse {
    status: String,
    #[serde(default)]
    candidates: Vec<WireCandidate>,
    #[serde(default)]
    search_time: f64,
    #[serde(default)]
    total_results: i64,
}

fn map_outcome(wire: WireSearchResponse) -> SearchOutcome {
    let candidates = wire
        .candidates
        .into_iter()
        .filter_map(|c| match Uuid::parse_str(&c.user_id) {
            Ok(job_seeker_id) => Some(CandidateMatch {
                job_seeker_id,
                match_score: c.match_score,
                match_reason: c.match_reason,
                keywords: c.keywords,
            }),
            Err(_) => {
                // The index can hold ids from other tenants or old formats;
                // drop them rather than failing the whole search.
                warn!(user_id = %c.user_id, "skipping candidate with malformed id");
                None
            }
        })
        .collect();

    SearchOutcome {
        status: wire.status,
        candidates,
        search_time: wire.search_time,
        total_results: wire.total_results,
    }
}

// ============================================================================
// Client Implementation
// ============================================================================

#[derive(Clone)]
pub struct AiSearchHttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl AiSearchHttpClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl CandidateSearchClient for AiSearchHttpClient {
    async fn search(&self, query: &str) -> Result<SearchOutcome, CandidateSearchError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .json(&WireSearchRequest { query })
            .send()
            .await
            .map_err(|e| CandidateSearchError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CandidateSearchError::Unavailable(format!(
                "search server answered {}",
                response.status()
            )));
        }

        let wire: WireSearchResponse = response
            .json()
            .await
            .map_err(|e| CandidateSearchError::InvalidResponse(e.to_string()))?;

        Ok(map_outcome(wire))
    }
}

// ============================================================================
// Tests
// ============================================================================
