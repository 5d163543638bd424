//! SpecGuard - security analyzer for OpenAPI/Swagger specifications
//!
//! Evaluates a fixed catalog of security rules (SEC001-SEC010) against
//! OpenAPI 3.x and Swagger 2.0 documents, scores the result, and serves the
//! reports over an HTTP API.

mod app;

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

pub use app::create_app;
pub use config::Config;
pub use logging::init_tracing;
