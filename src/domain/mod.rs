//! Core domain types for specification analysis

pub mod document;
pub mod findings;

pub use document::Document;
pub use findings::{Finding, GroupedFinding, Severity};
