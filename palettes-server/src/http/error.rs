//! API error type with IntoResponse
//!
//! Validation failures carry a plain message string as a JSON body.
//! Not-found and storage failures carry no body; storage failures are logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (422)
    Validation(ValidationError),

    /// Referenced row absent, or a listing came back empty (404)
    NotFound { resource: &'static str },

    /// Storage failure (500, logged, no detail returned)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => {
                tracing::debug!(error = %e, "request rejected");
                (StatusCode::UNPROCESSABLE_ENTITY, Json(e.to_string())).into_response()
            }
            Self::NotFound { resource } => {
                tracing::debug!(resource, "not found");
                StatusCode::NOT_FOUND.into_response()
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
