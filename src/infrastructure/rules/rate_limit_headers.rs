//! SEC004: missing rate-limit signaling

use crate::domain::{Document, Finding, Severity};
use crate::infrastructure::rules::{operations, Rule};

/// Flags operations whose responses declare no `X-RateLimit-*` header
/// (case-insensitive prefix match) anywhere.
pub struct RateLimitHeadersRule;

const RATE_LIMIT_PREFIX: &str = "x-ratelimit";

impl Rule for RateLimitHeadersRule {
    fn id(&self) -> &'static str {
        "SEC004"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn description(&self) -> &'static str {
        "No rate limiting headers defined in responses"
    }

    fn recommendation(&self) -> &'static str {
        "Include X-RateLimit-* headers to indicate API rate limits"
    }

    fn detect(&self, document: &Document) -> Vec<Finding> {
        operations(document)
            .into_iter()
            .filter(|(_, _, operation)| !declares_rate_limit_header(operation))
            .map(|(path, method, _)| {
                self.finding_at(format!("paths.{path}.{method}.responses"))
            })
            .collect()
    }
}

fn declares_rate_limit_header(operation: &Document) -> bool {
    let Some(responses) = operation
        .get_present("responses")
        .and_then(Document::as_mapping)
    else {
        return false;
    };

    responses.values().any(|response| {
        response
            .get_present("headers")
            .and_then(Document::as_mapping)
            .map(|headers| {
                headers
                    .keys()
                    .any(|name| name.to_lowercase().starts_with(RATE_LIMIT_PREFIX))
            })
            .unwrap_or(false)
    })
}
