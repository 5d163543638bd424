//! Generic document model for decoded OpenAPI/Swagger descriptors
//!
//! The analyzer never works against a schema-checked spec type. Rules inspect
//! whatever tree the decoder produced and treat every shape mismatch as "not
//! applicable", so the model is a plain sum type with total accessors that
//! return `Option` instead of casting.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A decoded specification value.
///
/// Mappings preserve insertion order so analysis output is deterministic for
/// a given input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Sequence(Vec<Document>),
    Mapping(IndexMap<String, Document>),
}

impl Document {
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Document>> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Document::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Raw mapping lookup. Returns `None` when `self` is not a mapping or the
    /// key is missing; an explicit `null` value is still returned.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Mapping lookup that treats an explicit `null` the same as a missing
    /// key. Every rule's presence check goes through this, so `security: null`
    /// and no `security` at all are indistinguishable to the catalog.
    pub fn get_present(&self, key: &str) -> Option<&Document> {
        match self.get(key) {
            Some(Document::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.get_present(key).is_some()
    }

    /// Greatest nesting depth of the tree. A scalar is depth 1. Walks
    /// iteratively so arbitrarily deep input cannot overflow the stack here.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&Document, usize)> = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            match node {
                Document::Mapping(map) => {
                    stack.extend(map.values().map(|child| (child, depth + 1)));
                }
                Document::Sequence(items) => {
                    stack.extend(items.iter().map(|child| (child, depth + 1)));
                }
                _ => {}
            }
        }
        max_depth
    }
}
