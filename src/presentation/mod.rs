//! HTTP API layer

pub mod errors;
pub mod models;
pub mod routes;

pub use errors::ApiError;
pub use routes::{router, AppState};
