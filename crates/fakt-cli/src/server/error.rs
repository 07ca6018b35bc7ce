//! API error types with JSON `{"detail": ...}` responses.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use fakt_core::GatewayError;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),
    #[error("Missing form field: {0}")]
    MissingField(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Gateway(e) => {
                tracing::error!(error = %e, "Invoice analysis failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Multipart(e) => e.status(),
            ApiError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
