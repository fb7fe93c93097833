pub mod candidate_search;

pub use candidate_search::{
    CandidateMatch, CandidateSearchClient, CandidateSearchError, SearchOutcome,
};
