// Webhook domain types
//
// These types represent a captured webhook request and its list projection.
// Used by both the API and storage layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Status code recorded for every captured request.
/// Reflects that the capture itself succeeded, not the sender's intent.
pub const CAPTURE_STATUS_CODE: i32 = 200;

/// A captured inbound HTTP request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Unique, time-ordered identifier (UUID v7).
    pub id: Uuid,
    /// HTTP method of the captured request.
    #[cfg_attr(feature = "openapi", schema(example = "POST"))]
    pub method: String,
    /// Request path with the capture prefix removed.
    #[cfg_attr(feature = "openapi", schema(example = "/stripe/events"))]
    pub pathname: String,
    /// Network address of the caller.
    pub ip: String,
    /// Status code recorded at capture time (always 200).
    pub status_code: i32,
    /// Value of the `content-type` header, if any.
    pub content_type: Option<String>,
    /// Parsed `content-length` header, null when missing or not numeric.
    pub content_length: Option<i32>,
    /// Request headers. Multi-valued headers are joined with `, `.
    pub headers: HashMap<String, String>,
    /// Raw request body. Structured bodies are stored as serialized JSON.
    pub body: Option<String>,
    /// Query string parameters of the captured request.
    #[serde(default)]
    pub query_params: HashMap<String, String>,
    /// When the request was captured.
    pub created_at: DateTime<Utc>,
}

/// Fixed projection returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WebhookSummary {
    pub id: Uuid,
    pub method: String,
    pub pathname: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Webhook> for WebhookSummary {
    fn from(webhook: &Webhook) -> Self {
        Self {
            id: webhook.id,
            method: webhook.method.clone(),
            pathname: webhook.pathname.clone(),
            created_at: webhook.created_at,
        }
    }
}

/// A webhook ready to be inserted. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWebhook {
    pub method: String,
    pub pathname: String,
    pub ip: String,
    pub status_code: i32,
    pub content_type: Option<String>,
    pub content_length: Option<i32>,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
    pub query_params: HashMap<String, String>,
}
