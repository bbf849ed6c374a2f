//! Application-wide error types.
//!
//! [`AppError`] covers startup failures surfaced from `main`;
//! [`ApiError`] is the per-request error rendered as a JSON response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::eval::EvalError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("cannot bind {0}: {1}")]
    Bind(String, #[source] std::io::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-request error. Client input problems map to 400, anything
/// unexpected to 500.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<EvalError> for ApiError {
    fn from(e: EvalError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                warn!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
