// Hookwatch Control Plane Library
// Decision: Shared library for binaries (API server, seed, export-openapi)
// Decision: Router assembly lives here so integration tests drive the real app in-process

// API routes and types (shared for OpenAPI generation)
pub mod api;

// Process configuration
pub mod config;

// Services layer
pub mod services;
pub use services::{HandlerService, WebhookService};

// Storage layer
pub mod storage;

// OpenAPI spec generation
pub mod openapi;

// Sample data for the seed binary
pub mod seed;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use config::{CorsOrigins, LlmConfig};
use hookwatch_core::{EchoHandlerGenerator, HandlerGenerator};
use hookwatch_openai::OpenAiHandlerGenerator;
use std::sync::Arc;
use storage::StorageBackend;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Pick the handler generator: OpenAI when a key is configured, echo otherwise
pub fn handler_generator(llm: &LlmConfig) -> Arc<dyn HandlerGenerator> {
    match &llm.api_key {
        Some(api_key) => {
            let generator = match &llm.api_url {
                Some(url) => OpenAiHandlerGenerator::with_base_url(api_key.clone(), url.clone()),
                None => OpenAiHandlerGenerator::new(api_key.clone()),
            }
            .with_model(llm.model.clone());
            Arc::new(generator)
        }
        None => Arc::new(EchoHandlerGenerator),
    }
}

/// Build the CORS layer. `*` allows any origin without credentials.
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
            header::CACHE_CONTROL,
        ]);

    match origins {
        CorsOrigins::Any => layer.allow_origin(AllowOrigin::any()),
        CorsOrigins::List(list) => {
            let values: Vec<HeaderValue> = list.iter().filter_map(|s| s.parse().ok()).collect();
            layer
                .allow_origin(AllowOrigin::list(values))
                .allow_credentials(true)
        }
    }
}

/// Assemble the full application router
pub fn build_router(
    db: Arc<StorageBackend>,
    generator: Arc<dyn HandlerGenerator>,
    cors_origins: &CorsOrigins,
) -> Router {
    let health_state = api::health::HealthState {
        storage: db.kind(),
        generator: generator.name(),
    };
    let capture_state = api::capture::AppState::new(db.clone());
    let webhooks_state = api::webhooks::AppState::new(db.clone());
    let handlers_state = api::handlers::AppState::new(db, generator);

    // CorsLayer answers every OPTIONS request itself, so capture stays outside it
    let query_routes = Router::new()
        .merge(api::health::routes(health_state))
        .merge(api::webhooks::routes(webhooks_state))
        .merge(api::handlers::routes(handlers_state))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", openapi::ApiDoc::openapi()))
        .layer(cors_layer(cors_origins));

    Router::new()
        .merge(query_routes)
        .merge(api::capture::routes(capture_state))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_generator_without_key() {
        let llm = LlmConfig {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            api_url: None,
        };
        assert_eq!(handler_generator(&llm).name(), "echo");
    }

    #[test]
    fn test_openai_generator_with_key() {
        let llm = LlmConfig {
            api_key: Some("sk-test".to_string()),
            model: "gpt-4o-mini".to_string(),
            api_url: Some("http://localhost:9999/v1/chat/completions".to_string()),
        };
        assert_eq!(handler_generator(&llm).name(), "openai");
    }
}
