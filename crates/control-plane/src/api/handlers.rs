// Handler-draft HTTP route

use crate::services::HandlerService;
use crate::storage::StorageBackend;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use hookwatch_core::HandlerGenerator;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::common::{ApiError, ErrorResponse};
use super::validation::{rejection, validate_handler_ids};

/// Request to draft a handler from captured webhooks
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateHandlerRequest {
    /// Ids of the webhooks whose bodies serve as examples (UUID v7, at most 100).
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateHandlerResponse {
    /// Generated TypeScript handler source.
    pub code: String,
}

/// App state for handler routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<HandlerService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>, generator: Arc<dyn HandlerGenerator>) -> Self {
        Self {
            service: Arc::new(HandlerService::new(db, generator)),
        }
    }
}

/// Create handler routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/handlers", post(generate_handler))
        .with_state(state)
}

/// POST /api/handlers - Generate a handler from webhook payloads
#[utoipa::path(
    post,
    path = "/api/handlers",
    request_body = GenerateHandlerRequest,
    responses(
        (status = 201, description = "Handler generated", body = GenerateHandlerResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "handlers"
)]
pub async fn generate_handler(
    State(state): State<AppState>,
    body: Result<Json<GenerateHandlerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GenerateHandlerResponse>), ApiError> {
    let Json(req) = body.map_err(rejection)?;
    validate_handler_ids(&req.ids)?;

    let code = state.service.generate(&req.ids).await.map_err(|e| {
        tracing::error!("Failed to generate handler: {:#}", e);
        ErrorResponse::internal()
    })?;

    Ok((StatusCode::CREATED, Json(GenerateHandlerResponse { code })))
}
