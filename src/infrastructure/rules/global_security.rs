//! SEC001: no global security scheme

use crate::domain::{Document, Finding, Severity};
use crate::infrastructure::rules::Rule;

/// Flags descriptors that declare neither a top-level `security` requirement
/// nor a security-scheme registry (`securityDefinitions` for Swagger 2.0,
/// `components.securitySchemes` for OpenAPI 3.x).
pub struct GlobalSecurityRule;

impl Rule for GlobalSecurityRule {
    fn id(&self) -> &'static str {
        "SEC001"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn description(&self) -> &'static str {
        "No global security definition found in OpenAPI specification"
    }

    fn recommendation(&self) -> &'static str {
        "Define global security schemes and apply them at the root level"
    }

    fn detect(&self, document: &Document) -> Vec<Finding> {
        let has_global_security = document.has("security");

        let has_definitions = if document.has("swagger") {
            document.has("securityDefinitions")
        } else if document.has("openapi") {
            document
                .get_present("components")
                .map(|components| components.has("securitySchemes"))
                .unwrap_or(false)
        } else {
            false
        };

        if has_global_security || has_definitions {
            return Vec::new();
        }

        vec![self.finding_at("root")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> Document {
        serde_yml::from_str(text).unwrap()
    }

    #[test]
    fn flags_v3_spec_without_any_security() {
        let doc = decode("openapi: 3.0.0\npaths: {}\n");
        let findings = GlobalSecurityRule.detect(&doc);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].location, "root");
        assert_eq!(findings[0].severity, Severity::Critical);
    }

    #[test]
    fn accepts_v3_security_schemes() {
        let doc = decode(
            r#"
openapi: 3.0.0
paths: {}
components:
  securitySchemes:
    bearerAuth:
      type: http
      scheme: bearer
"#,
        );
        assert!(GlobalSecurityRule.detect(&doc).is_empty());
    }

    #[test]
    fn accepts_v2_security_definitions() {
        let doc = decode(
            r#"
swagger: "2.0"
paths: {}
securityDefinitions:
  apiKey:
    type: apiKey
    in: header
    name: X-API-Key
"#,
        );
        assert!(GlobalSecurityRule.detect(&doc).is_empty());
    }

    #[test]
    fn accepts_top_level_security_requirement() {
        let doc = decode("openapi: 3.0.0\npaths: {}\nsecurity:\n  - bearerAuth: []\n");
        assert!(GlobalSecurityRule.detect(&doc).is_empty());
    }

    #[test]
    fn null_security_counts_as_absent() {
        let doc = decode("openapi: 3.0.0\npaths: {}\nsecurity: null\n");
        assert_eq!(GlobalSecurityRule.detect(&doc).len(), 1);
    }
}
