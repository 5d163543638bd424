//! SEC009: wildcard or templated server host without constraints

use crate::domain::{Document, Finding, Severity};
use crate::infrastructure::rules::{is_v3, Rule};

/// OpenAPI 3.x only. Flags a server whose URL contains a `*` wildcard or a
/// `{...}` template when no `variables` object exists; with variables
/// present, flags the first templated variable lacking an `enum` constraint
/// (at most one finding per server).
pub struct ServerVariablesRule;

impl Rule for ServerVariablesRule {
    fn id(&self) -> &'static str {
        "SEC009"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn description(&self) -> &'static str {
        "Server URL contains wildcard or templated host without variable constraints"
    }

    fn recommendation(&self) -> &'static str {
        "Avoid wildcards and constrain server variables using enum values"
    }

    fn detect(&self, document: &Document) -> Vec<Finding> {
        if !is_v3(document) {
            return Vec::new();
        }

        let servers = document
            .get_present("servers")
            .and_then(Document::as_sequence)
            .unwrap_or_default();

        let mut findings = Vec::new();

        for (index, server) in servers.iter().enumerate() {
            if server.as_mapping().is_none() {
                continue;
            }
            let url = server
                .get_present("url")
                .and_then(Document::as_str)
                .unwrap_or_default();

            let has_wildcard = url.contains('*');
            let has_template = url.contains('{') && url.contains('}');
            let variables = server
                .get_present("variables")
                .and_then(Document::as_mapping);

            if (has_wildcard || has_template) && variables.is_none() {
                findings.push(self.finding_at(format!("servers[{index}].url")));
                continue;
            }

            if has_template {
                if let Some(variables) = variables {
                    for (name, variable) in variables {
                        if variable.as_mapping().is_none() {
                            continue;
                        }
                        if !variable.has("enum") {
                            findings.push(
                                self.finding_at(format!("servers[{index}].variables.{name}")),
                            );
                            break;
                        }
                    }
                }
            }
        }

        findings
    }
}
