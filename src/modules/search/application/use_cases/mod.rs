pub mod search_candidates;
