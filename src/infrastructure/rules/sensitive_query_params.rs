//! SEC005: sensitive data in query parameters

use crate::domain::{Document, Finding, Severity};
use crate::infrastructure::rules::{operations, Rule};

/// Flags query-located parameters whose name contains a sensitive term
/// (case-insensitive substring). One finding per parameter; the first
/// matching term wins.
pub struct SensitiveQueryParamsRule;

const SENSITIVE_TERMS: [&str; 6] = ["password", "token", "secret", "api_key", "apikey", "auth"];

impl Rule for SensitiveQueryParamsRule {
    fn id(&self) -> &'static str {
        "SEC005"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn description(&self) -> &'static str {
        "Sensitive data exposed in query parameter"
    }

    fn recommendation(&self) -> &'static str {
        "Avoid using sensitive data in query parameters; use headers or request body instead"
    }

    fn detect(&self, document: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (path, method, operation) in operations(document) {
            let parameters = operation
                .get_present("parameters")
                .and_then(Document::as_sequence)
                .unwrap_or_default();

            for parameter in parameters {
                if parameter.get_present("in").and_then(Document::as_str) != Some("query") {
                    continue;
                }
                let name = parameter
                    .get_present("name")
                    .and_then(Document::as_str)
                    .unwrap_or_default();
                let lowered = name.to_lowercase();
                if SENSITIVE_TERMS.iter().any(|term| lowered.contains(term)) {
                    findings.push(
                        self.finding_at(format!("paths.{path}.{method}.parameters.{name}")),
                    );
                }
            }
        }

        findings
    }
}
