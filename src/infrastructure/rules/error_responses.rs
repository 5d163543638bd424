//! SEC006: missing standard error responses

use crate::domain::{Document, Finding, Severity};
use crate::infrastructure::rules::{operations, Rule};

/// Flags operations missing any of the 401/403/429 responses. One finding
/// per operation covers all missing codes.
pub struct ErrorResponsesRule;

const REQUIRED_CODES: [&str; 3] = ["401", "403", "429"];

impl Rule for ErrorResponsesRule {
    fn id(&self) -> &'static str {
        "SEC006"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn description(&self) -> &'static str {
        "Missing standard error response definitions (401, 403, 429)"
    }

    fn recommendation(&self) -> &'static str {
        "Define 401, 403, and 429 error responses for better security and API resilience"
    }

    fn detect(&self, document: &Document) -> Vec<Finding> {
        operations(document)
            .into_iter()
            .filter(|(_, _, operation)| {
                let responses = operation.get_present("responses");
                REQUIRED_CODES.iter().any(|code| {
                    !responses.map(|r| r.has(code)).unwrap_or(false)
                })
            })
            .map(|(path, method, _)| {
                self.finding_at(format!("paths.{path}.{method}.responses"))
            })
            .collect()
    }
}
