pub mod job_seeker_profiles;
pub mod portfolios;
