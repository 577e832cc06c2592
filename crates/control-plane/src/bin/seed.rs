// Seed the database with sample Stripe webhooks
//
// Usage: cargo run --bin seed
//
// Clears the webhooks table, then inserts 60 Stripe-style events.
// Needs DATABASE_URL; migrations are applied first.

use anyhow::{Context, Result};
use chrono::Utc;
use hookwatch_control_plane::seed::stripe_webhooks;
use hookwatch_control_plane::storage::StorageBackend;
use hookwatch_core::telemetry::{init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut telemetry_config = TelemetryConfig::from_env();
    if telemetry_config.log_filter.is_none() {
        telemetry_config.log_filter = Some("seed=info,hookwatch_control_plane=info".to_string());
    }
    init_telemetry(telemetry_config);

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = StorageBackend::postgres(&database_url)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await.context("Failed to run migrations")?;

    tracing::info!("Seeding database...");

    let cleared = db.clear_webhooks().await?;
    tracing::info!(cleared, "Cleared existing webhooks");

    let rows = stripe_webhooks(&mut rand::thread_rng(), Utc::now().timestamp());
    let count = rows.len();
    for row in rows {
        db.create_webhook(row).await?;
    }

    tracing::info!(count, "Database seeded with Stripe webhook records");
    Ok(())
}
