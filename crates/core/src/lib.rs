// Core Webhook Abstractions
//
// This crate holds the DB-agnostic pieces of Hookwatch:
// - Webhook domain types shared by the API and storage layers
// - Capture normalization (raw request -> NewWebhook)
// - Keyset pagination over time-ordered ids
// - The HandlerGenerator seam used to draft typed handlers from payloads
//
// Key design decisions:
// - Nothing here touches the network or a database; stores and generators are
//   injected by the control plane
// - Capture normalization is infallible, every inbound request is recorded
// - Ids are UUID v7 so id order matches creation order

pub mod capture;
pub mod error;
pub mod generator;
pub mod handler_prompt;
pub mod pagination;
pub mod webhook;

// Telemetry (tracing subscriber + gen-ai attribute names)
pub mod telemetry;

// Re-exports for convenience
pub use capture::{CaptureBody, CapturedRequest, CAPTURE_PREFIX};
pub use error::{HookwatchError, Result};
pub use generator::{EchoHandlerGenerator, HandlerGenerator};
pub use handler_prompt::{build_handler_prompt, join_payloads};
pub use pagination::{Keyed, Page, PageRequest, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
pub use webhook::{NewWebhook, Webhook, WebhookSummary, CAPTURE_STATUS_CODE};
