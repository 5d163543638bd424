//! Application services: analysis orchestration, scoring, aggregation

pub mod aggregation;
pub mod analyzer;
pub mod scoring;

pub use aggregation::group_findings;
pub use analyzer::Analyzer;
pub use scoring::calculate_score;
