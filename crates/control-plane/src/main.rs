// Hookwatch API server
// Decision: DEV_MODE swaps PostgreSQL for the in-memory store
// Decision: Handler drafts use OpenAI when OPENAI_API_KEY is set, echo mode otherwise

use anyhow::{Context, Result};
use hookwatch_control_plane::config::AppConfig;
use hookwatch_control_plane::storage::StorageBackend;
use hookwatch_control_plane::{build_router, handler_generator};
use hookwatch_core::telemetry::{init_telemetry, TelemetryConfig};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Configure via environment variables:
    // - RUST_LOG / LOG_LEVEL: Log filter (default: "hookwatch_control_plane=debug,tower_http=debug")
    // - LOG_FORMAT=json: JSON log lines
    let mut telemetry_config = TelemetryConfig::from_env();
    if telemetry_config.service_name == "hookwatch" {
        telemetry_config.service_name = "hookwatch-control-plane".to_string();
    }
    init_telemetry(telemetry_config);

    let config = AppConfig::from_env().context("Invalid configuration")?;
    tracing::info!(env = ?config.env, port = config.port, "hookwatch starting...");

    let db = if config.dev_mode {
        tracing::warn!("DEV_MODE enabled, using in-memory storage (data is lost on restart)");
        StorageBackend::in_memory()
    } else {
        let database_url = config
            .database_url
            .as_deref()
            .context("DATABASE_URL environment variable required")?;
        let db = StorageBackend::postgres(database_url)
            .await
            .context("Failed to connect to database")?;
        tracing::info!("Connected to database");

        if config.run_migrations {
            db.migrate().await.context("Failed to run migrations")?;
            tracing::info!("Database migrations applied");
        }
        db
    };

    let generator = handler_generator(&config.llm);
    if config.llm.api_key.is_some() {
        tracing::info!(model = %config.llm.model, "Handler generation via OpenAI");
    } else {
        tracing::warn!("OPENAI_API_KEY not set, handler generation echoes payloads");
    }

    tracing::info!(origins = ?config.cors_origins, "CORS configured");

    let app = build_router(Arc::new(db), generator, &config.cors_origins);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("HTTP server listening on {}", addr);
    tracing::info!("API docs available at http://localhost:{}/docs", config.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
