pub mod ai_search_http;
