// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use hookwatch_core::{NewWebhook, Webhook, WebhookSummary};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

// ============================================
// Webhooks
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct WebhookRow {
    pub id: Uuid,
    pub method: String,
    pub pathname: String,
    pub ip: String,
    pub status_code: i32,
    pub content_type: Option<String>,
    pub content_length: Option<i32>,
    pub headers: Json<HashMap<String, String>>,
    pub body: Option<String>,
    pub query_params: Json<HashMap<String, String>>,
    pub created_at: DateTime<Utc>,
}

/// List projection, only the columns the list endpoint returns
#[derive(Debug, Clone, FromRow)]
pub struct WebhookSummaryRow {
    pub id: Uuid,
    pub method: String,
    pub pathname: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateWebhookRow {
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

impl From<NewWebhook> for CreateWebhookRow {
    fn from(webhook: NewWebhook) -> Self {
        Self {
            method: webhook.method,
            pathname: webhook.pathname,
            ip: webhook.ip,
            status_code: webhook.status_code,
            content_type: webhook.content_type,
            content_length: webhook.content_length,
            headers: webhook.headers,
            body: webhook.body,
            query_params: webhook.query_params,
        }
    }
}

impl From<WebhookRow> for Webhook {
    fn from(row: WebhookRow) -> Self {
        Self {
            id: row.id,
            method: row.method,
            pathname: row.pathname,
            ip: row.ip,
            status_code: row.status_code,
            content_type: row.content_type,
            content_length: row.content_length,
            headers: row.headers.0,
            body: row.body,
            query_params: row.query_params.0,
            created_at: row.created_at,
        }
    }
}

impl From<&WebhookRow> for WebhookSummaryRow {
    fn from(row: &WebhookRow) -> Self {
        Self {
            id: row.id,
            method: row.method.clone(),
            pathname: row.pathname.clone(),
            created_at: row.created_at,
        }
    }
}

impl From<WebhookSummaryRow> for WebhookSummary {
    fn from(row: WebhookSummaryRow) -> Self {
        Self {
            id: row.id,
            method: row.method,
            pathname: row.pathname,
            created_at: row.created_at,
        }
    }
}
