// OpenAPI specification generation
//
// This module defines the OpenAPI spec for the Hookwatch API.
// It is used by both the API server (for Swagger UI) and the
// export-openapi binary (for static spec generation).
// The capture route is left out since it accepts any request shape.

use crate::api;
use hookwatch_core::{Webhook, WebhookSummary};
use utoipa::OpenApi;

/// OpenAPI documentation for the Hookwatch API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::webhooks::list_webhooks,
        api::webhooks::get_webhook,
        api::webhooks::delete_webhook,
        api::handlers::generate_handler,
        api::health::health,
    ),
    components(
        schemas(
            Webhook,
            WebhookSummary,
            api::webhooks::WebhookPage,
            api::handlers::GenerateHandlerRequest,
            api::handlers::GenerateHandlerResponse,
            api::health::HealthResponse,
            api::ErrorResponse,
        )
    ),
    tags(
        (name = "webhooks", description = "Captured webhook endpoints"),
        (name = "handlers", description = "Handler generation endpoints"),
        (name = "health", description = "Service health")
    ),
    info(
        title = "Hookwatch API",
        version = "0.1.0",
        description = "Inspect captured webhooks and draft typed handlers from their payloads",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_query_routes_only() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| *p == "/api/webhooks"));
        assert!(paths.iter().any(|p| *p == "/api/webhooks/{id}"));
        assert!(paths.iter().any(|p| *p == "/api/handlers"));
        assert!(!paths.iter().any(|p| p.starts_with("/capture")));
    }

    #[test]
    fn test_to_json() {
        let json = ApiDoc::to_json().unwrap();
        assert!(json.contains("Hookwatch API"));
    }
}
