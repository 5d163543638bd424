//! Top-level structural acceptance
//!
//! Runs after decoding and before analysis. Only documents that classify as
//! OpenAPI 3.x or Swagger 2.0 and carry a `paths` key reach the rule
//! catalog; everything else is an input-rejected condition, not an analysis
//! result.

use thiserror::Error;

use crate::domain::Document;

/// Descriptor style the document classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    /// Swagger 2.0 (`swagger: "2.0"`).
    V2,
    /// OpenAPI 3.x (`openapi: "<version>"`).
    V3,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid OpenAPI structure")]
    NotAnObject,

    #[error("missing 'paths' in OpenAPI spec")]
    MissingPaths,

    #[error("invalid OpenAPI version")]
    InvalidOpenApiVersion,

    #[error("unsupported Swagger version")]
    UnsupportedSwaggerVersion,

    #[error("unsupported OpenAPI version")]
    UnknownVersion,
}

/// Accept or reject a decoded document for analysis.
pub fn validate(document: &Document) -> Result<SpecVersion, ValidationError> {
    let mapping = document
        .as_mapping()
        .ok_or(ValidationError::NotAnObject)?;

    if !mapping.contains_key("paths") {
        return Err(ValidationError::MissingPaths);
    }

    if let Some(openapi) = mapping.get("openapi") {
        return match openapi.as_str() {
            Some(version) if !version.is_empty() => Ok(SpecVersion::V3),
            _ => Err(ValidationError::InvalidOpenApiVersion),
        };
    }

    if let Some(swagger) = mapping.get("swagger") {
        return if swagger.as_str() == Some("2.0") {
            Ok(SpecVersion::V2)
        } else {
            Err(ValidationError::UnsupportedSwaggerVersion)
        };
    }

    Err(ValidationError::UnknownVersion)
}
