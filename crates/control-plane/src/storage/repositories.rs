// Repository layer for database operations

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::*;

const MAX_CONNECTIONS: u32 = 10;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Apply the migrations embedded from `migrations/`
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    // ============================================
    // Webhooks
    // ============================================

    pub async fn create_webhook(&self, input: CreateWebhookRow) -> Result<WebhookRow> {
        let row = sqlx::query_as::<_, WebhookRow>(
            r#"
            INSERT INTO webhooks (id, method, pathname, ip, status_code, content_type, content_length, headers, body, query_params)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, method, pathname, ip, status_code, content_type, content_length, headers, body, query_params, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.method)
        .bind(&input.pathname)
        .bind(&input.ip)
        .bind(input.status_code)
        .bind(&input.content_type)
        .bind(input.content_length)
        .bind(Json(&input.headers))
        .bind(&input.body)
        .bind(Json(&input.query_params))
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_webhook(&self, id: Uuid) -> Result<Option<WebhookRow>> {
        let row = sqlx::query_as::<_, WebhookRow>(
            r#"
            SELECT id, method, pathname, ip, status_code, content_type, content_length, headers, body, query_params, created_at
            FROM webhooks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Keyset page of summaries, newest first. `limit` is the over-fetch size.
    pub async fn list_webhooks(
        &self,
        cursor: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<WebhookSummaryRow>> {
        let rows = sqlx::query_as::<_, WebhookSummaryRow>(
            r#"
            SELECT id, method, pathname, created_at
            FROM webhooks
            WHERE ($1::uuid IS NULL OR id < $1)
            ORDER BY id DESC
            LIMIT $2
            "#,
        )
        .bind(cursor)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Returns the ids actually removed (empty when nothing matched).
    pub async fn delete_webhook(&self, id: Uuid) -> Result<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            DELETE FROM webhooks
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    pub async fn list_webhook_bodies(&self, ids: &[Uuid]) -> Result<Vec<Option<String>>> {
        let bodies = sqlx::query_scalar::<_, Option<String>>(
            r#"
            SELECT body
            FROM webhooks
            WHERE id = ANY($1)
            ORDER BY id DESC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(bodies)
    }

    /// Remove every captured webhook. Used by the seed tool.
    pub async fn clear_webhooks(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM webhooks")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
