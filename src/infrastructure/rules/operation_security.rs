//! SEC002: unprotected endpoints

use crate::domain::{Document, Finding, Severity};
use crate::infrastructure::rules::{operations, Rule};

/// Flags operations that declare no security of their own while no global
/// security requirement exists to cover them.
pub struct OperationSecurityRule;

impl Rule for OperationSecurityRule {
    fn id(&self) -> &'static str {
        "SEC002"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn description(&self) -> &'static str {
        "Endpoint has no security requirements defined"
    }

    fn recommendation(&self) -> &'static str {
        "Apply authentication using global or operation-level security"
    }

    fn detect(&self, document: &Document) -> Vec<Finding> {
        if document.has("security") {
            return Vec::new();
        }

        operations(document)
            .into_iter()
            .filter(|(_, _, operation)| !operation.has("security"))
            .map(|(path, method, _)| {
                self.finding_at(format!("paths.{path}.{method}.security"))
            })
            .collect()
    }
}
