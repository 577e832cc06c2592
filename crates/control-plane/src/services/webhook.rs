// Webhook service for capture and query

use crate::storage::{CreateWebhookRow, StorageBackend};
use anyhow::Result;
use hookwatch_core::{CapturedRequest, Page, PageRequest, Webhook, WebhookSummary};
use std::sync::Arc;
use uuid::Uuid;

pub struct WebhookService {
    db: Arc<StorageBackend>,
}

impl WebhookService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    /// Normalize and persist an inbound request, returning the new id
    pub async fn capture(&self, request: CapturedRequest) -> Result<Uuid> {
        let webhook = request.normalize();
        let row = self.db.create_webhook(CreateWebhookRow::from(webhook)).await?;

        tracing::debug!(
            webhook_id = %row.id,
            method = %row.method,
            pathname = %row.pathname,
            "Captured webhook"
        );

        Ok(row.id)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Webhook>> {
        Ok(self.db.get_webhook(id).await?.map(Webhook::from))
    }

    pub async fn list(&self, request: PageRequest) -> Result<Page<WebhookSummary>> {
        let rows = self
            .db
            .list_webhooks(request.cursor(), request.fetch_limit())
            .await?;

        let summaries = rows.into_iter().map(WebhookSummary::from).collect();
        Ok(Page::from_overfetch(summaries, request.limit()))
    }

    /// Returns false when no webhook had this id
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let deleted = self.db.delete_webhook(id).await?;
        if !deleted.is_empty() {
            tracing::debug!(webhook_id = %id, "Deleted webhook");
        }
        Ok(!deleted.is_empty())
    }
}
