// Handler-draft generator seam
//
// The API layer only sees this trait. The LLM-backed implementation lives in
// hookwatch-openai; EchoHandlerGenerator is the offline fallback.

use async_trait::async_trait;

use crate::error::Result;

/// Produces handler source code from concatenated example payloads.
#[async_trait]
pub trait HandlerGenerator: Send + Sync {
    /// Generate a handler draft. `payloads` is the `"\n\n"`-joined list of
    /// captured bodies.
    async fn generate(&self, payloads: &str) -> Result<String>;

    /// Short name used in logs and the health endpoint.
    fn name(&self) -> &'static str;
}

/// Degraded mode: returns the payloads unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoHandlerGenerator;

#[async_trait]
impl HandlerGenerator for EchoHandlerGenerator {
    async fn generate(&self, payloads: &str) -> Result<String> {
        Ok(payloads.to_string())
    }

    fn name(&self) -> &'static str {
        "echo"
    }
}
