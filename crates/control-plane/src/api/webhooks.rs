// Webhook query HTTP routes

use crate::services::WebhookService;
use crate::storage::StorageBackend;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use hookwatch_core::{PageRequest, Webhook, WebhookSummary};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::common::{ApiError, ErrorResponse};
use super::validation::{rejection, validate_webhook_id, ValidationError};

/// Query parameters for listing webhooks
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListWebhooksQuery {
    /// Page size, 1 to 100.
    #[param(minimum = 1, maximum = 100, default = 20)]
    pub limit: Option<i64>,
    /// Id of the last webhook of the previous page.
    pub cursor: Option<Uuid>,
}

/// One page of webhook summaries, newest first
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPage {
    pub webhooks: Vec<WebhookSummary>,
    /// Pass as `cursor` to get the next page. Null on the last page.
    pub next_cursor: Option<Uuid>,
}

/// App state for webhook routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WebhookService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(WebhookService::new(db)),
        }
    }
}

/// Create webhook routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/webhooks", get(list_webhooks))
        .route("/api/webhooks/:id", get(get_webhook).delete(delete_webhook))
        .with_state(state)
}

/// GET /api/webhooks - List captured webhooks
#[utoipa::path(
    get,
    path = "/api/webhooks",
    params(ListWebhooksQuery),
    responses(
        (status = 200, description = "Page of webhooks", body = WebhookPage),
        (status = 400, description = "Invalid limit or cursor", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "webhooks"
)]
pub async fn list_webhooks(
    State(state): State<AppState>,
    query: Result<Query<ListWebhooksQuery>, QueryRejection>,
) -> Result<Json<WebhookPage>, ApiError> {
    let Query(query) = query.map_err(rejection)?;
    let request = PageRequest::new(query.limit, query.cursor)
        .map_err(|e| ValidationError::new(e.to_string()))?;

    let page = state.service.list(request).await.map_err(|e| {
        tracing::error!("Failed to list webhooks: {}", e);
        ErrorResponse::internal()
    })?;

    Ok(Json(WebhookPage {
        webhooks: page.items,
        next_cursor: page.next_cursor,
    }))
}

/// GET /api/webhooks/{id} - Get a captured webhook
#[utoipa::path(
    get,
    path = "/api/webhooks/{id}",
    params(
        ("id" = Uuid, Path, description = "Webhook ID (UUID v7)")
    ),
    responses(
        (status = 200, description = "Webhook found", body = Webhook),
        (status = 400, description = "Invalid webhook ID", body = ErrorResponse),
        (status = 404, description = "Webhook not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "webhooks"
)]
pub async fn get_webhook(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Webhook>, ApiError> {
    let Path(raw_id) = path.map_err(rejection)?;
    let id = validate_webhook_id(&raw_id)?;

    let webhook = state
        .service
        .get(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get webhook: {}", e);
            ErrorResponse::internal()
        })?
        .ok_or_else(|| ErrorResponse::not_found("Webhook not found"))?;

    Ok(Json(webhook))
}

/// DELETE /api/webhooks/{id} - Delete a captured webhook
#[utoipa::path(
    delete,
    path = "/api/webhooks/{id}",
    params(
        ("id" = Uuid, Path, description = "Webhook ID (UUID v7)")
    ),
    responses(
        (status = 204, description = "Webhook deleted"),
        (status = 400, description = "Invalid webhook ID", body = ErrorResponse),
        (status = 404, description = "Webhook not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "webhooks"
)]
pub async fn delete_webhook(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(raw_id) = path.map_err(rejection)?;
    let id = validate_webhook_id(&raw_id)?;

    let deleted = state.service.delete(id).await.map_err(|e| {
        tracing::error!("Failed to delete webhook: {}", e);
        ErrorResponse::internal()
    })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ErrorResponse::not_found(format!(
            "Webhook with ID {id} not found."
        )))
    }
}
