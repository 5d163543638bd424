//! SEC008: deprecated operations without sunset information

use crate::domain::{Document, Finding, Severity};
use crate::infrastructure::rules::{operations, Rule};

/// Flags operations marked `deprecated: true` that declare none of `sunset`,
/// `x-sunset` or `x-deprecation-date`.
pub struct DeprecationSunsetRule;

const SUNSET_KEYS: [&str; 3] = ["sunset", "x-sunset", "x-deprecation-date"];

impl Rule for DeprecationSunsetRule {
    fn id(&self) -> &'static str {
        "SEC008"
    }

    fn severity(&self) -> Severity {
        Severity::Low
    }

    fn description(&self) -> &'static str {
        "Deprecated endpoint does not specify sunset or removal information"
    }

    fn recommendation(&self) -> &'static str {
        "Add sunset or deprecation timeline information for deprecated endpoints"
    }

    fn detect(&self, document: &Document) -> Vec<Finding> {
        operations(document)
            .into_iter()
            .filter(|(_, _, operation)| {
                operation
                    .get_present("deprecated")
                    .and_then(Document::as_bool)
                    .unwrap_or(false)
                    && !SUNSET_KEYS.iter().any(|key| operation.has(key))
            })
            .map(|(path, method, _)| self.finding_at(format!("paths.{path}.{method}")))
            .collect()
    }
}
