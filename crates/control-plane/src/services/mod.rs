// Services layer for business logic
// Services own business logic, calling storage directly

pub mod handler;
pub mod webhook;

pub use handler::HandlerService;
pub use webhook::WebhookService;
