pub mod performance;
pub mod scoring;
