// OpenAI Handler Generator
//
// Sends the handler-draft prompt as a single user message and returns the
// first choice's text.

use crate::types::{ChatRequest, MessageRole, OpenAiMessage, OpenAiResponse};
use anyhow::Context;
use async_trait::async_trait;
use hookwatch_core::telemetry::{chat_span_name, gen_ai};
use hookwatch_core::{build_handler_prompt, HandlerGenerator, HookwatchError};
use reqwest::Client;
use tracing::Instrument;

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_HANDLER_MODEL: &str = "gpt-4o-mini";

/// Handler-draft generator backed by an OpenAI-compatible chat completion API
pub struct OpenAiHandlerGenerator {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl OpenAiHandlerGenerator {
    /// Create a new generator with the default endpoint and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, OPENAI_API_URL)
    }

    /// Create a new generator with a custom API URL
    pub fn with_base_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_url: api_url.into(),
            model: DEFAULT_HANDLER_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn chat_completion(&self, prompt: String) -> anyhow::Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![OpenAiMessage {
                role: MessageRole::User,
                content: Some(prompt),
            }],
            temperature: None,
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send OpenAI request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "OpenAI API request failed with status {}: {}",
                status,
                error_text
            );
        }

        let response_json: OpenAiResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI response")?;

        let choice = response_json
            .choices
            .first()
            .ok_or_else(|| anyhow::anyhow!("No choices in OpenAI response"))?;

        if let Some(usage) = &response_json.usage {
            tracing::debug!(
                "gen_ai.response.model" = %response_json.model,
                "gen_ai.usage.input_tokens" = usage.prompt_tokens,
                "gen_ai.usage.output_tokens" = usage.completion_tokens,
                finish_reason = ?choice.finish_reason,
                "Handler draft completed"
            );
        }

        Ok(choice.message.content.clone().unwrap_or_default())
    }
}

#[async_trait]
impl HandlerGenerator for OpenAiHandlerGenerator {
    async fn generate(&self, payloads: &str) -> hookwatch_core::Result<String> {
        let span = tracing::info_span!(
            "gen_ai.chat",
            "otel.name" = %chat_span_name(&self.model),
            "gen_ai.operation.name" = gen_ai::operation::CHAT,
            "gen_ai.provider.name" = gen_ai::provider::OPENAI,
            "gen_ai.request.model" = %self.model,
        );

        let text = self
            .chat_completion(build_handler_prompt(payloads))
            .instrument(span)
            .await
            .map_err(|e| HookwatchError::generation(format!("{e:#}")))?;

        Ok(strip_code_fence(&text))
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

impl std::fmt::Debug for OpenAiHandlerGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiHandlerGenerator")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Remove a surrounding markdown code fence, if the model added one anyway.
pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };

    // Drop the info string (e.g. "typescript") on the opening line.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => "",
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim_end().to_string()
}
