//! Application setup and wiring

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::presentation::{router, AppState};

/// Build the application router with all middleware attached.
pub fn create_app(config: Config) -> Router {
    let limit = config.server.max_body_bytes;
    let state = AppState::new(config);

    router(state)
        .layer(DefaultBodyLimit::max(limit))
        .layer(TraceLayer::new_for_http())
}
