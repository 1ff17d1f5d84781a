//! Error types for the conversion service.
//!
//! Maps boundary failures to HTTP status codes: bad input is 400, an
//! internal renderer or collaborator fault is 500, and a conversion
//! timeout is 504. The rendering core itself never surfaces errors here;
//! it always returns a complete (possibly degraded) document.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Service-level result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Boundary error taxonomy.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed request: missing/invalid PDF source, bad base64, failed
    /// download, oversized payload.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The conversion did not finish within the configured timeout.
    #[error("Conversion timed out")]
    Timeout,

    /// Unexpected internal fault (task panic, PDFium unavailable, IO).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<crate::Error> for AppError {
    fn from(err: crate::Error) -> Self {
        match err {
            // Unparseable bytes are the caller's problem.
            crate::Error::InvalidPdf(msg) => AppError::BadRequest(format!("Invalid PDF: {}", msg)),
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::Timeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "timeout",
                "Conversion timed out".to_string(),
            ),
            AppError::Internal(msg) => {
                log::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            },
        };

        (
            status,
            Json(ErrorResponse {
                error: error_type,
                message,
            }),
        )
            .into_response()
    }
}
