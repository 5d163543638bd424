//! External-facing collaborators: decoding, validation, retrieval, rules

pub mod decoder;
pub mod fetcher;
pub mod rules;
pub mod validator;

pub use decoder::{decode, DecodeError};
pub use fetcher::{FetchError, SpecFetcher};
pub use validator::{validate, SpecVersion, ValidationError};
