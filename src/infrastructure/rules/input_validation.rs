//! SEC010: schemas without input validation constraints

use crate::domain::{Document, Finding, Severity};
use crate::infrastructure::rules::{operations, Rule};

/// Flags parameter and request-body schemas that exist but declare none of
/// the standard validation constraints.
pub struct InputValidationRule;

const CONSTRAINT_KEYS: [&str; 6] = [
    "minLength",
    "maxLength",
    "minimum",
    "maximum",
    "pattern",
    "enum",
];

impl Rule for InputValidationRule {
    fn id(&self) -> &'static str {
        "SEC010"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn description(&self) -> &'static str {
        "Input schema lacks validation constraints"
    }

    fn recommendation(&self) -> &'static str {
        "Define input validation such as min/max, pattern, or enum"
    }

    fn detect(&self, document: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (path, method, operation) in operations(document) {
            let parameters = operation
                .get_present("parameters")
                .and_then(Document::as_sequence)
                .unwrap_or_default();

            for parameter in parameters {
                if let Some(schema) = parameter.get_present("schema") {
                    if schema.as_mapping().is_some() && !has_constraint(schema) {
                        let name = parameter
                            .get_present("name")
                            .and_then(Document::as_str)
                            .unwrap_or_default();
                        findings.push(
                            self.finding_at(format!("paths.{path}.{method}.parameters.{name}")),
                        );
                    }
                }
            }

            let media_types = operation
                .get_present("requestBody")
                .and_then(|body| body.get_present("content"))
                .and_then(Document::as_mapping);

            if let Some(media_types) = media_types {
                for media in media_types.values() {
                    if let Some(schema) = media.get_present("schema") {
                        if schema.as_mapping().is_some() && !has_constraint(schema) {
                            findings.push(
                                self.finding_at(format!("paths.{path}.{method}.requestBody")),
                            );
                        }
                    }
                }
            }
        }

        findings
    }
}

fn has_constraint(schema: &Document) -> bool {
    CONSTRAINT_KEYS.iter().any(|key| schema.has(key))
}
