use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Body shape for every non-2xx response: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error taxonomy surfaced to HTTP callers.
///
/// Every variant renders as a `{message}` JSON body with the matching status
/// code; handlers propagate these with `?`. Failures inside the stock
/// reconciliation worker never pass through here — they are invisible to the
/// request that enqueued them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input → 422.
    #[error("{0}")]
    Validation(String),
    /// Referenced entity absent → 404.
    #[error("{0}")]
    NotFound(String),
    /// Missing or invalid token → 401.
    #[error("{0}")]
    Unauthorized(String),
    /// Authenticated but wrong role → 403.
    #[error("{0}")]
    Forbidden(String),
    /// Business rule violated (e.g. insufficient stock) → 400.
    #[error("{0}")]
    Domain(String),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Domain(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(err) = &self {
            tracing::error!(error = %err, "database error while handling request");
        }
        (self.status(), Json(Message::new(self.to_string()))).into_response()
    }
}
