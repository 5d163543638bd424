//! API request and response models

use serde::{Deserialize, Serialize};

use crate::domain::{Finding, GroupedFinding};

/// Response model for health checks
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self { status: "running" }
    }
}

/// Flat analysis report returned for raw document bodies
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub total_issues: usize,
    pub security_score: u8,
    pub findings: Vec<Finding>,
}

impl AnalysisReport {
    pub fn new(findings: Vec<Finding>, security_score: u8) -> Self {
        Self {
            total_issues: findings.len(),
            security_score,
            findings,
        }
    }
}

/// Flat analysis report for uploaded files, echoing the filename back
#[derive(Debug, Serialize)]
pub struct FileAnalysisReport {
    pub filename: String,
    pub total_issues: usize,
    pub security_score: u8,
    pub findings: Vec<Finding>,
}

impl FileAnalysisReport {
    pub fn new(filename: String, findings: Vec<Finding>, security_score: u8) -> Self {
        Self {
            filename,
            total_issues: findings.len(),
            security_score,
            findings,
        }
    }
}

/// Report with findings grouped per rule, returned for URL analysis
#[derive(Debug, Serialize)]
pub struct GroupedAnalysisReport {
    pub total_issues: usize,
    pub grouped_issues: usize,
    pub security_score: u8,
    pub findings: Vec<GroupedFinding>,
}

impl GroupedAnalysisReport {
    pub fn new(findings: Vec<Finding>, grouped: Vec<GroupedFinding>, security_score: u8) -> Self {
        Self {
            total_issues: findings.len(),
            grouped_issues: grouped.len(),
            security_score,
            findings: grouped,
        }
    }
}

/// Request model for remote specification analysis
#[derive(Debug, Deserialize)]
pub struct UrlAnalysisRequest {
    pub url: String,
}

/// Error body returned for all client-facing failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
