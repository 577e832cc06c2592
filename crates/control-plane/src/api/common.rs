// Common DTOs for public API
//
// These types are shared across multiple API endpoints.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned for unexpected failures. Details go to the log only.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    #[schema(example = "Webhook not found")]
    pub message: String,
}

/// Error half of every handler's return type.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Convert to axum response tuple
    pub fn into_response(self, status: StatusCode) -> ApiError {
        (status, Json(self))
    }

    pub fn not_found(message: impl Into<String>) -> ApiError {
        Self::new(message).into_response(StatusCode::NOT_FOUND)
    }

    pub fn internal() -> ApiError {
        Self::new(INTERNAL_ERROR_MESSAGE).into_response(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
