/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not configured")]
    MissingConfig(&'static str),
    #[error("Image analysis failed: {0}")]
    Decode(String),
    #[error("Upstream request failed with status {status}")]
    Upstream { status: u16 },
    #[error("External request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::MissingConfig(_) => (StatusCode::BAD_REQUEST, "CONFIG_MISSING"),
            ApiError::Decode(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DECODE_ERROR"),
            ApiError::Upstream { status } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                match *status {
                    403 => "UPSTREAM_403",
                    404 => "UPSTREAM_404",
                    429 => "UPSTREAM_429",
                    500..=599 => "UPSTREAM_5XX",
                    _ => "UPSTREAM_ERROR",
                },
            ),
            ApiError::Transport(_) => (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_UNREACHABLE"),
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let error_response = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
