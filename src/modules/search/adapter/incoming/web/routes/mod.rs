mod search_candidates;

pub use search_candidates::search_candidates_handler;
