//! Security rule catalog
//!
//! Each rule is an independent detector over the decoded document: stateless,
//! deterministic, and defensive. A field of unexpected shape or a missing key
//! means "not applicable" for that region, never an error, and the rule keeps
//! scanning the rest of the document. Rules share no state and may run in any
//! order; catalog order only fixes the order findings appear in the flat list.

pub mod deprecation_sunset;
pub mod error_responses;
pub mod global_security;
pub mod input_validation;
pub mod operation_security;
pub mod rate_limit_headers;
pub mod security_contact;
pub mod sensitive_query_params;
pub mod server_variables;
pub mod transport_security;

pub use deprecation_sunset::DeprecationSunsetRule;
pub use error_responses::ErrorResponsesRule;
pub use global_security::GlobalSecurityRule;
pub use input_validation::InputValidationRule;
pub use operation_security::OperationSecurityRule;
pub use rate_limit_headers::RateLimitHeadersRule;
pub use security_contact::SecurityContactRule;
pub use sensitive_query_params::SensitiveQueryParamsRule;
pub use server_variables::ServerVariablesRule;
pub use transport_security::TransportSecurityRule;

use std::sync::Arc;

use crate::domain::{Document, Finding, Severity};

/// A single security heuristic.
///
/// Metadata lives on the rule rather than inside finding construction so the
/// catalog is introspectable and a rule's severity, description and
/// recommendation cannot drift apart between findings of the same rule.
pub trait Rule: Send + Sync {
    fn id(&self) -> &'static str;

    fn severity(&self) -> Severity;

    fn description(&self) -> &'static str;

    fn recommendation(&self) -> &'static str;

    /// Detect violations in `document`. Absence of the inspected structures
    /// is not an error; the rule simply contributes zero findings.
    fn detect(&self, document: &Document) -> Vec<Finding>;

    /// Build a finding for this rule at `location`, carrying the rule's
    /// static metadata.
    fn finding_at(&self, location: impl Into<String>) -> Finding
    where
        Self: Sized,
    {
        Finding {
            rule_id: self.id().to_string(),
            severity: self.severity(),
            description: self.description().to_string(),
            location: location.into(),
            recommendation: self.recommendation().to_string(),
        }
    }
}

/// The fixed catalog, in SEC001..SEC010 order.
pub fn catalog() -> Vec<Arc<dyn Rule>> {
    vec![
        Arc::new(GlobalSecurityRule),
        Arc::new(OperationSecurityRule),
        Arc::new(TransportSecurityRule),
        Arc::new(RateLimitHeadersRule),
        Arc::new(SensitiveQueryParamsRule),
        Arc::new(ErrorResponsesRule),
        Arc::new(SecurityContactRule),
        Arc::new(DeprecationSunsetRule),
        Arc::new(ServerVariablesRule),
        Arc::new(InputValidationRule),
    ]
}

/// Iterate every operation under `paths`, skipping `x-` extension keys and
/// any entry that is not mapping-shaped. Yields `(path, method, operation)`
/// in document order; the operation value is always a mapping.
pub(crate) fn operations(document: &Document) -> Vec<(&str, &str, &Document)> {
    let mut out = Vec::new();
    let Some(paths) = document
        .get_present("paths")
        .and_then(Document::as_mapping)
    else {
        return out;
    };

    for (path, item) in paths {
        let Some(methods) = item.as_mapping() else {
            continue;
        };
        for (method, operation) in methods {
            if method.starts_with("x-") {
                continue;
            }
            if operation.as_mapping().is_none() {
                continue;
            }
            out.push((path.as_str(), method.as_str(), operation));
        }
    }

    out
}

/// True when the descriptor is OpenAPI v3 style (`openapi` key present).
pub(crate) fn is_v3(document: &Document) -> bool {
    document.has("openapi")
}
