// Handler-draft service
//
// Loads the bodies of the selected webhooks and hands them to the configured
// HandlerGenerator.

use crate::storage::StorageBackend;
use anyhow::Result;
use hookwatch_core::{join_payloads, HandlerGenerator};
use std::sync::Arc;
use uuid::Uuid;

pub struct HandlerService {
    db: Arc<StorageBackend>,
    generator: Arc<dyn HandlerGenerator>,
}

impl HandlerService {
    pub fn new(db: Arc<StorageBackend>, generator: Arc<dyn HandlerGenerator>) -> Self {
        Self { db, generator }
    }

    pub async fn generate(&self, ids: &[Uuid]) -> Result<String> {
        let bodies = self.db.list_webhook_bodies(ids).await?;
        let payloads = join_payloads(bodies);

        tracing::info!(
            requested = ids.len(),
            payload_bytes = payloads.len(),
            generator = self.generator.name(),
            "Generating handler draft"
        );

        let code = self.generator.generate(&payloads).await?;
        Ok(code)
    }
}
