// Capture route
//
// Accepts any method on any path under /capture and records the request.
// There is no rejection path: whatever arrives is stored and answered 201.
// Not part of the OpenAPI document, since its request shape is arbitrary.

use crate::services::WebhookService;
use crate::storage::StorageBackend;
use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    routing::any,
    Json, Router,
};
use hookwatch_core::{CaptureBody, CapturedRequest, CAPTURE_PREFIX};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use uuid::Uuid;

use super::common::{ApiError, ErrorResponse};

/// Used when neither the socket address nor a forwarding header is known
pub const UNKNOWN_IP: &str = "unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureResponse {
    pub id: Uuid,
}

/// App state for capture routes
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

/// Create capture routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(CAPTURE_PREFIX, any(capture_webhook))
        // `/*path` needs a non-empty tail, so the bare trailing slash is its own route
        .route(&format!("{CAPTURE_PREFIX}/"), any(capture_webhook))
        .route(&format!("{CAPTURE_PREFIX}/*path"), any(capture_webhook))
        .with_state(state)
}

/// ANY /capture/* - Record an inbound webhook
pub async fn capture_webhook(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<CaptureResponse>), ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let request = CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        ip: client_ip(connect_info.map(|ConnectInfo(addr)| addr), &headers),
        body: CaptureBody::decode(content_type, &body),
        headers: header_pairs(&headers),
    };

    let id = state.service.capture(request).await.map_err(|e| {
        tracing::error!("Failed to capture webhook: {}", e);
        ErrorResponse::internal()
    })?;

    Ok((StatusCode::CREATED, Json(CaptureResponse { id })))
}

/// Header pairs in transport order. Non-UTF-8 values are decoded lossily.
fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

/// Socket peer address, else the first `x-forwarded-for` hop, else "unknown".
fn client_ip(peer: Option<SocketAddr>, headers: &HeaderMap) -> String {
    if let Some(addr) = peer {
        return addr.ip().to_string();
    }

    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(UNKNOWN_IP)
        .to_string()
}
