// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// This module provides a unified StorageBackend enum that can work with
// either PostgreSQL (production) or in-memory (dev mode) storage.

use anyhow::Result;
use uuid::Uuid;

use super::memory::InMemoryDatabase;
use super::models::*;
use super::repositories::Database;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL database (production)
    Postgres(Database),
    /// In-memory database (dev mode)
    InMemory(std::sync::Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a PostgreSQL storage backend from a database URL
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        Ok(Self::Postgres(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(std::sync::Arc::new(InMemoryDatabase::new()))
    }

    /// Short backend name for logs and the health endpoint
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "memory",
        }
    }

    /// Apply migrations. No-op for the in-memory backend.
    pub async fn migrate(&self) -> Result<()> {
        match self {
            Self::Postgres(db) => db.migrate().await,
            Self::InMemory(_) => Ok(()),
        }
    }

    // ============================================
    // Webhooks
    // ============================================

    pub async fn create_webhook(&self, input: CreateWebhookRow) -> Result<WebhookRow> {
        match self {
            Self::Postgres(db) => db.create_webhook(input).await,
            Self::InMemory(db) => db.create_webhook(input).await,
        }
    }

    pub async fn get_webhook(&self, id: Uuid) -> Result<Option<WebhookRow>> {
        match self {
            Self::Postgres(db) => db.get_webhook(id).await,
            Self::InMemory(db) => db.get_webhook(id).await,
        }
    }

    pub async fn list_webhooks(
        &self,
        cursor: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<WebhookSummaryRow>> {
        match self {
            Self::Postgres(db) => db.list_webhooks(cursor, limit).await,
            Self::InMemory(db) => db.list_webhooks(cursor, limit).await,
        }
    }

    pub async fn delete_webhook(&self, id: Uuid) -> Result<Vec<Uuid>> {
        match self {
            Self::Postgres(db) => db.delete_webhook(id).await,
            Self::InMemory(db) => db.delete_webhook(id).await,
        }
    }

    pub async fn list_webhook_bodies(&self, ids: &[Uuid]) -> Result<Vec<Option<String>>> {
        match self {
            Self::Postgres(db) => db.list_webhook_bodies(ids).await,
            Self::InMemory(db) => db.list_webhook_bodies(ids).await,
        }
    }

    pub async fn clear_webhooks(&self) -> Result<u64> {
        match self {
            Self::Postgres(db) => db.clear_webhooks().await,
            Self::InMemory(db) => db.clear_webhooks().await,
        }
    }
}
