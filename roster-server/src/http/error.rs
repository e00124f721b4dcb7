//! API error types with IntoResponse
//!
//! Errors are converted to `{"detail": ...}` bodies with matching status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// No user with this id (404)
    NotFound { id: i32 },

    /// Email already taken (409)
    Conflict { email: String },

    /// Path or body could not be coerced into the expected type
    Rejected { status: StatusCode, detail: String },

    /// Database unreachable (503, logged)
    Unavailable(StoreError),

    /// Any other store failure (500, logged)
    Internal(StoreError),
}

impl ApiError {
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Rejected { status, .. } => *status,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::NotFound { id } => format!("User with ID {} not found", id),
            Self::Conflict { email } => format!("User with email {} already exists", email),
            Self::Rejected { detail, .. } => detail,
            Self::Unavailable(e) => {
                tracing::error!("Database unavailable: {}", e);
                "database unavailable".to_owned()
            }
            Self::Internal(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                "internal server error".to_owned()
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id } => Self::NotFound { id },
            StoreError::Conflict { email } => Self::Conflict { email },
            e if e.is_unavailable() => Self::Unavailable(e),
            e => Self::Internal(e),
        }
    }
}
