pub mod auth;
pub mod portfolio;
pub mod search;
