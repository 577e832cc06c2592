// OpenAI Handler Generator
//
// This crate provides the OpenAI-backed implementation of the HandlerGenerator
// trait from hookwatch-core. The control plane picks it when OPENAI_API_KEY is
// set and falls back to the echo generator otherwise.

mod generator;
mod types;


pub use generator::{
    strip_code_fence, OpenAiHandlerGenerator, DEFAULT_HANDLER_MODEL, OPENAI_API_URL,
};
pub use types::{ChatRequest, MessageRole, OpenAiMessage, OpenAiResponse};
