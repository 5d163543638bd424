//! Raw text decoding into the document model
//!
//! Accepts JSON or YAML. YAML is tried first since it is a superset of JSON
//! for the shapes we care about; the JSON fallback catches inputs the YAML
//! parser rejects (e.g. duplicate-key handling differences).

use thiserror::Error;
use tracing::debug;

use crate::domain::Document;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no specification content provided")]
    Empty,

    #[error("unable to parse specification as YAML or JSON")]
    Unparseable,

    #[error("specification exceeds maximum nesting depth of {max_depth}")]
    TooDeep { max_depth: usize },
}

/// Decode raw specification text into a [`Document`], rejecting documents
/// nested deeper than `max_depth` so no unbounded recursion reaches the
/// rule catalog.
pub fn decode(text: &str, max_depth: usize) -> Result<Document, DecodeError> {
    if text.trim().is_empty() {
        return Err(DecodeError::Empty);
    }

    let document = serde_yml::from_str::<Document>(text)
        .map_err(|yaml_err| {
            debug!(error = %yaml_err, "YAML decode failed, trying JSON");
            yaml_err
        })
        .or_else(|_| serde_json::from_str::<Document>(text))
        .map_err(|_| DecodeError::Unparseable)?;

    if document.depth() > max_depth {
        return Err(DecodeError::TooDeep { max_depth });
    }

    Ok(document)
}
