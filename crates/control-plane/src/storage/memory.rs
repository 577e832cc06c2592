// In-memory storage implementation for dev mode
// Decision: Use parking_lot for thread-safe access
// Decision: UUIDs generated via uuid v7 (time-ordered)
//
// Webhooks live in a BTreeMap keyed by id so keyset pages are a reverse
// range scan, matching the ORDER BY id DESC of the PostgreSQL queries.

use anyhow::Result;
use chrono::Utc;
use parking_lot::RwLock;
use sqlx::types::Json;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::models::*;

/// In-memory database for dev mode
/// All data is stored in memory and lost on restart
#[derive(Default)]
pub struct InMemoryDatabase {
    webhooks: RwLock<BTreeMap<Uuid, WebhookRow>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================
    // Webhooks
    // ============================================

    pub async fn create_webhook(&self, input: CreateWebhookRow) -> Result<WebhookRow> {
        let id = Uuid::now_v7();
        let row = WebhookRow {
            id,
            method: input.method,
            pathname: input.pathname,
            ip: input.ip,
            status_code: input.status_code,
            content_type: input.content_type,
            content_length: input.content_length,
            headers: Json(input.headers),
            body: input.body,
            query_params: Json(input.query_params),
            created_at: Utc::now(),
        };
        self.webhooks.write().insert(id, row.clone());
        Ok(row)
    }

    pub async fn get_webhook(&self, id: Uuid) -> Result<Option<WebhookRow>> {
        Ok(self.webhooks.read().get(&id).cloned())
    }

    pub async fn list_webhooks(
        &self,
        cursor: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<WebhookSummaryRow>> {
        let webhooks = self.webhooks.read();
        let take = usize::try_from(limit).unwrap_or(0);
        let rows = match cursor {
            Some(cursor) => webhooks
                .range(..cursor)
                .rev()
                .take(take)
                .map(|(_, row)| WebhookSummaryRow::from(row))
                .collect(),
            None => webhooks
                .values()
                .rev()
                .take(take)
                .map(WebhookSummaryRow::from)
                .collect(),
        };
        Ok(rows)
    }

    pub async fn delete_webhook(&self, id: Uuid) -> Result<Vec<Uuid>> {
        Ok(self
            .webhooks
            .write()
            .remove(&id)
            .map(|row| vec![row.id])
            .unwrap_or_default())
    }

    pub async fn list_webhook_bodies(&self, ids: &[Uuid]) -> Result<Vec<Option<String>>> {
        let webhooks = self.webhooks.read();
        Ok(webhooks
            .values()
            .rev()
            .filter(|row| ids.contains(&row.id))
            .map(|row| row.body.clone())
            .collect())
    }

    pub async fn clear_webhooks(&self) -> Result<u64> {
        let mut webhooks = self.webhooks.write();
        let count = webhooks.len() as u64;
        webhooks.clear();
        Ok(count)
    }
}
