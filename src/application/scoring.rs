//! Security score calculation

use crate::domain::Finding;

/// Reduce a finding list to a single score in `[0, 100]`.
///
/// Starts at 100 and subtracts a fixed penalty per finding by severity
/// (Critical 20, High 10, Medium 5, Low 2), clamped at 0. Penalties are
/// non-negative, so clamping the final sum is equivalent to clamping every
/// intermediate value.
pub fn calculate_score(findings: &[Finding]) -> u8 {
    let penalty: u32 = findings.iter().map(|f| f.severity.penalty()).sum();
    100u32.saturating_sub(penalty) as u8
}
