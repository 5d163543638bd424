//! End-to-end analysis scenarios over realistic documents

mod common;

use specguard::application::{calculate_score, group_findings, Analyzer};
use specguard::domain::{Document, Severity};
use specguard::infrastructure::{decode, validate, SpecVersion};

fn analyze(text: &str) -> Vec<specguard::domain::Finding> {
    let document = decode(text, 128).expect("fixture must decode");
    validate(&document).expect("fixture must validate");
    Analyzer::new().analyze(&document)
}

#[test]
fn bare_v3_document_yields_one_critical_at_root() {
    let findings = analyze(common::bare_v3_spec());

    let criticals: Vec<_> = findings
        .iter()
        .filter(|f| f.severity == Severity::Critical)
        .collect();
    assert_eq!(criticals.len(), 1);
    assert_eq!(criticals[0].rule_id, "SEC001");
    assert_eq!(criticals[0].location, "root");

    let critical_only: Vec<_> = findings
        .iter()
        .filter(|f| f.severity == Severity::Critical)
        .cloned()
        .collect();
    assert_eq!(calculate_score(&critical_only), 80);
}

#[test]
fn unsecured_operation_yields_global_and_per_operation_findings() {
    let findings = analyze(common::unsecured_operation_spec());

    assert!(findings.iter().any(|f| f.rule_id == "SEC001"));
    let sec002: Vec<_> = findings.iter().filter(|f| f.rule_id == "SEC002").collect();
    assert_eq!(sec002.len(), 1);
    assert_eq!(sec002[0].location, "paths./users.get.security");

    let core: Vec<_> = findings
        .iter()
        .filter(|f| f.rule_id == "SEC001" || f.rule_id == "SEC002")
        .cloned()
        .collect();
    assert_eq!(calculate_score(&core), 70);
}

#[test]
fn http_server_url_is_flagged_at_its_index() {
    let text = r#"{
        "openapi": "3.0.0",
        "info": {"contact": {"email": "sec@example.com"}},
        "security": [{"bearerAuth": []}],
        "servers": [
            {"url": "https://api.example.com"},
            {"url": "http://staging.example.com"}
        ],
        "paths": {}
    }"#;
    let findings = analyze(text);

    let sec003: Vec<_> = findings.iter().filter(|f| f.rule_id == "SEC003").collect();
    assert_eq!(sec003.len(), 1);
    assert_eq!(sec003[0].location, "servers[1].url");
    assert_eq!(sec003[0].severity, Severity::High);
}

#[test]
fn swagger_http_scheme_is_flagged_once() {
    let findings = analyze(common::http_v2_spec());
    let sec003: Vec<_> = findings.iter().filter(|f| f.rule_id == "SEC003").collect();
    assert_eq!(sec003.len(), 1);
    assert_eq!(sec003[0].location, "schemes");
}

#[test]
fn deprecated_operation_requires_sunset() {
    let base = r#"{
        "openapi": "3.0.0",
        "paths": {
            "/old": {
                "get": {"deprecated": true}
            }
        }
    }"#;
    let findings = analyze(base);
    let sec008: Vec<_> = findings.iter().filter(|f| f.rule_id == "SEC008").collect();
    assert_eq!(sec008.len(), 1);
    assert_eq!(sec008[0].location, "paths./old.get");

    let with_sunset = r#"{
        "openapi": "3.0.0",
        "paths": {
            "/old": {
                "get": {"deprecated": true, "sunset": "2025-01-01"}
            }
        }
    }"#;
    let findings = analyze(with_sunset);
    assert!(findings.iter().all(|f| f.rule_id != "SEC008"));
}

#[test]
fn sensitive_query_parameter_is_flagged_by_name() {
    let template = |name: &str| {
        format!(
            r#"{{
                "openapi": "3.0.0",
                "paths": {{
                    "/search": {{
                        "get": {{
                            "parameters": [
                                {{"name": "{name}", "in": "query",
                                 "schema": {{"type": "string", "maxLength": 64}}}}
                            ]
                        }}
                    }}
                }}
            }}"#
        )
    };

    let findings = analyze(&template("api_key"));
    let sec005: Vec<_> = findings.iter().filter(|f| f.rule_id == "SEC005").collect();
    assert_eq!(sec005.len(), 1);
    assert_eq!(sec005[0].location, "paths./search.get.parameters.api_key");

    let renamed = analyze(&template("id"));
    assert!(renamed.iter().all(|f| f.rule_id != "SEC005"));

    // Everything else is unchanged by the rename.
    let other = |fs: &[specguard::domain::Finding]| {
        fs.iter()
            .filter(|f| f.rule_id != "SEC005")
            .map(|f| (f.rule_id.clone(), f.location.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(other(&findings), other(&renamed));
}

#[test]
fn clean_document_scores_one_hundred() {
    let findings = analyze(common::clean_v3_spec());
    assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    assert_eq!(calculate_score(&findings), 100);
}

#[test]
fn grouped_report_preserves_first_seen_order() {
    let text = r#"{
        "openapi": "3.0.0",
        "paths": {
            "/a": {"get": {}},
            "/b": {"get": {}}
        }
    }"#;
    let findings = analyze(text);
    let grouped = group_findings(&findings);

    let mut seen = Vec::new();
    for finding in &findings {
        if !seen.contains(&finding.rule_id) {
            seen.push(finding.rule_id.clone());
        }
    }
    let grouped_ids: Vec<_> = grouped.iter().map(|g| g.rule_id.clone()).collect();
    assert_eq!(grouped_ids, seen);

    let total: usize = grouped.iter().map(|g| g.count).sum();
    assert_eq!(total, findings.len());
}

#[test]
fn validator_classifies_both_versions() {
    let v3 = decode(common::bare_v3_spec(), 128).unwrap();
    assert_eq!(validate(&v3).unwrap(), SpecVersion::V3);

    let v2 = decode(common::http_v2_spec(), 128).unwrap();
    assert_eq!(validate(&v2).unwrap(), SpecVersion::V2);

    let missing_paths = decode(r#"{"openapi": "3.0.0"}"#, 128).unwrap();
    assert!(validate(&missing_paths).is_err());

    assert!(validate(&Document::Bool(true)).is_err());
}
