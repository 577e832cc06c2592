// HTTP API routes
//
// This module contains all HTTP route handlers.
// Each submodule handles a specific resource type with its own AppState.

pub mod capture;
pub mod common;
pub mod handlers;
pub mod health;
pub mod validation;
pub mod webhooks;

// Re-export common types
pub use common::{ApiError, ErrorResponse};
