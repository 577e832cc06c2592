// Input validation for the query and handler APIs
//
// Everything a client sends to /api is checked here before it reaches a
// service. Failures become 400 responses with an ErrorResponse body.
// The capture route never validates anything.

use super::common::{ApiError, ErrorResponse};
use axum::http::StatusCode;
use axum::Json;
use uuid::{Uuid, Version};

// =============================================================================
// Limits
// =============================================================================

/// Maximum number of webhook ids accepted by a single handler-generation request.
pub const MAX_HANDLER_IDS: usize = 100;

// =============================================================================
// Validation Functions
// =============================================================================

/// Validation error carrying the client-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<ValidationError> for StatusCode {
    fn from(_: ValidationError) -> Self {
        StatusCode::BAD_REQUEST
    }
}

impl From<ValidationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ValidationError) -> Self {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.0)))
    }
}

/// Map an axum extractor rejection (query, path, JSON body) to a 400.
pub fn rejection<R: std::fmt::Display>(rejection: R) -> ApiError {
    tracing::debug!("Rejected request input: {}", rejection);
    ValidationError::new(rejection.to_string()).into()
}

/// Parse a webhook id. Ids are time-ordered UUIDs (version 7).
pub fn validate_webhook_id(raw: &str) -> Result<Uuid, ValidationError> {
    let id = Uuid::parse_str(raw)
        .map_err(|_| ValidationError::new(format!("Invalid webhook ID: {raw}")))?;
    require_v7(id)
}

/// Reject UUIDs that are not version 7.
pub fn require_v7(id: Uuid) -> Result<Uuid, ValidationError> {
    if id.get_version() != Some(Version::SortRand) {
        return Err(ValidationError::new(format!(
            "Invalid webhook ID: {id} is not a UUID v7"
        )));
    }
    Ok(id)
}

/// Validate the id list of a handler-generation request
pub fn validate_handler_ids(ids: &[Uuid]) -> Result<(), ValidationError> {
    if ids.len() > MAX_HANDLER_IDS {
        tracing::warn!(
            "Handler request id count exceeds limit: {} (max: {})",
            ids.len(),
            MAX_HANDLER_IDS
        );
        return Err(ValidationError::new(format!(
            "ids must contain at most {MAX_HANDLER_IDS} items"
        )));
    }
    for id in ids {
        require_v7(*id)?;
    }
    Ok(())
}
