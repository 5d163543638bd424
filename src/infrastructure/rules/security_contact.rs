//! SEC007: missing security contact

use crate::domain::{Document, Finding, Severity};
use crate::infrastructure::rules::Rule;

/// Flags descriptors whose `info` block carries neither a `contact` object
/// nor an `x-security-contact` extension. At most one finding per document.
pub struct SecurityContactRule;

impl Rule for SecurityContactRule {
    fn id(&self) -> &'static str {
        "SEC007"
    }

    fn severity(&self) -> Severity {
        Severity::Low
    }

    fn description(&self) -> &'static str {
        "No contact or security contact information provided"
    }

    fn recommendation(&self) -> &'static str {
        "Add info.contact or x-security-contact for vulnerability reporting"
    }

    fn detect(&self, document: &Document) -> Vec<Finding> {
        let has_contact = document
            .get_present("info")
            .map(|info| info.has("contact") || info.has("x-security-contact"))
            .unwrap_or(false);

        if has_contact {
            Vec::new()
        } else {
            vec![self.finding_at("info")]
        }
    }
}
