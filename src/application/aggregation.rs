//! Finding aggregation

use indexmap::IndexMap;

use crate::domain::{Finding, GroupedFinding};

/// Group findings by rule id.
///
/// Group entries appear in first-seen order and each group's locations keep
/// the order the findings were produced in, so grouped output is stable
/// across runs for the same input.
pub fn group_findings(findings: &[Finding]) -> Vec<GroupedFinding> {
    let mut groups: IndexMap<&str, GroupedFinding> = IndexMap::new();

    for finding in findings {
        groups
            .entry(finding.rule_id.as_str())
            .and_modify(|group| {
                group.count += 1;
                group.locations.push(finding.location.clone());
            })
            .or_insert_with(|| GroupedFinding {
                rule_id: finding.rule_id.clone(),
                severity: finding.severity,
                count: 1,
                locations: vec![finding.location.clone()],
                description: finding.description.clone(),
                recommendation: finding.recommendation.clone(),
            });
    }

    groups.into_values().collect()
}
