//! SEC003: insecure transport allowed

use crate::domain::{Document, Finding, Severity};
use crate::infrastructure::rules::{is_v3, Rule};

/// Flags plain-HTTP transport: an `http://` server URL in OpenAPI 3.x style,
/// or `http` in the Swagger 2.0 `schemes` list.
pub struct TransportSecurityRule;

impl Rule for TransportSecurityRule {
    fn id(&self) -> &'static str {
        "SEC003"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn description(&self) -> &'static str {
        "Insecure HTTP protocol allowed"
    }

    fn recommendation(&self) -> &'static str {
        "Use HTTPS instead of HTTP for all server URLs and schemes"
    }

    fn detect(&self, document: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        if is_v3(document) {
            let servers = document
                .get_present("servers")
                .and_then(Document::as_sequence)
                .unwrap_or_default();
            for (index, server) in servers.iter().enumerate() {
                let Some(url) = server.get_present("url").and_then(Document::as_str) else {
                    continue;
                };
                if url.starts_with("http://") {
                    findings.push(self.finding_at(format!("servers[{index}].url")));
                }
            }
        }

        if document.get_present("swagger").and_then(Document::as_str) == Some("2.0") {
            let schemes = document
                .get_present("schemes")
                .and_then(Document::as_sequence)
                .unwrap_or_default();
            if schemes.iter().any(|s| s.as_str() == Some("http")) {
                findings.push(self.finding_at("schemes"));
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> Document {
        serde_yml::from_str(text).unwrap()
    }

    #[test]
    fn flags_http_server_url_in_v3() {
        let doc = decode(
            "openapi: 3.0.0\npaths: {}\nservers:\n  - url: http://api.example.com\n",
        );
        let findings = TransportSecurityRule.detect(&doc);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].location, "servers[0].url");
        assert_eq!(findings[0].severity, Severity::High);
    }

    #[test]
    fn https_servers_are_clean() {
        let doc = decode(
            "openapi: 3.0.0\npaths: {}\nservers:\n  - url: https://api.example.com\n",
        );
        assert!(TransportSecurityRule.detect(&doc).is_empty());
    }

    #[test]
    fn reports_index_of_each_http_server() {
        let doc = decode(
            r#"
openapi: 3.0.0
paths: {}
servers:
  - url: https://api.example.com
  - url: http://staging.example.com
"#,
        );
        let findings = TransportSecurityRule.detect(&doc);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].location, "servers[1].url");
    }

    #[test]
    fn flags_http_scheme_in_v2_once() {
        let doc = decode("swagger: \"2.0\"\npaths: {}\nschemes: [https, http]\n");
        let findings = TransportSecurityRule.detect(&doc);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].location, "schemes");
    }

    #[test]
    fn ignores_malformed_server_entries() {
        let doc = decode("openapi: 3.0.0\npaths: {}\nservers:\n  - 42\n  - url: [bad]\n");
        assert!(TransportSecurityRule.detect(&doc).is_empty());
    }
}
