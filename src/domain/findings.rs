//! Finding entities produced by the rule catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a finding. Serialized exactly as `"Critical"`, `"High"`,
/// `"Medium"`, `"Low"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Score deduction applied per finding of this severity.
    pub fn penalty(&self) -> u32 {
        match self {
            Severity::Critical => 20,
            Severity::High => 10,
            Severity::Medium => 5,
            Severity::Low => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
        }
    }
}

/// One detected issue. Created by a rule during analysis and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub rule_id: String,
    pub severity: Severity,
    pub description: String,
    /// Dotted/bracketed path into the analyzed document,
    /// e.g. `paths./users.get.security` or `servers[0].url`.
    pub location: String,
    pub recommendation: String,
}

/// Findings aggregated per rule. Derived from a finding list, never stored.
///
/// `severity`, `description` and `recommendation` come from the first finding
/// seen for the rule; by construction every finding of one rule shares them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedFinding {
    pub rule_id: String,
    pub severity: Severity,
    pub count: usize,
    pub locations: Vec<String>,
    pub description: String,
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serializes_as_exact_strings() {
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"Critical\"");
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"Medium\"");
        assert_eq!(serde_json::to_string(&Severity::Low).unwrap(), "\"Low\"");
    }

    #[test]
    fn penalties_match_severity_weights() {
        assert_eq!(Severity::Critical.penalty(), 20);
        assert_eq!(Severity::High.penalty(), 10);
        assert_eq!(Severity::Medium.penalty(), 5);
        assert_eq!(Severity::Low.penalty(), 2);
    }
}
