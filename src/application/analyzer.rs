//! Analysis orchestration

use std::sync::Arc;
use tracing::debug;

use crate::domain::{Document, Finding};
use crate::infrastructure::rules::{catalog, Rule};

/// Applies the rule catalog to one document.
///
/// Holds no mutable state: every call is independent and the same analyzer
/// may serve concurrent requests. Rules are total over well-typed documents,
/// so analysis itself cannot fail; a rule that finds nothing to inspect just
/// contributes zero findings.
pub struct Analyzer {
    rules: Vec<Arc<dyn Rule>>,
}

impl Analyzer {
    /// Analyzer over the full fixed catalog, in SEC001..SEC010 order.
    pub fn new() -> Self {
        Self::with_rules(catalog())
    }

    pub fn with_rules(rules: Vec<Arc<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Run every rule in catalog order and concatenate their findings in the
    /// order produced.
    pub fn analyze(&self, document: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();
        for rule in &self.rules {
            let detected = rule.detect(document);
            if !detected.is_empty() {
                debug!(rule = rule.id(), count = detected.len(), "rule matched");
            }
            findings.extend(detected);
        }
        findings
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
