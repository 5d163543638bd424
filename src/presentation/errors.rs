//! Client-facing error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::infrastructure::{DecodeError, FetchError, ValidationError};
use crate::presentation::models::ErrorResponse;

/// Errors surfaced to API clients.
///
/// Every variant maps to a 400 with an `{"error": ...}` body; analysis has
/// no server-side state that can fail, so a bad outcome always means bad
/// input.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::debug!(error = %message, "rejecting request");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: message }),
        )
            .into_response()
    }
}
