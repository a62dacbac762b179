//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("store error: {0}")]
    Store(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        // Single-line message objects, the shape existing clients parse
        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Convert store errors to API errors
impl From<vidcat_store::StoreError> for ApiError {
    fn from(err: vidcat_store::StoreError) -> Self {
        ApiError::Store(err.to_string())
    }
}
