// Error types for webhook capture and handler drafting

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, HookwatchError>;

/// Errors that can occur in the core webhook operations
#[derive(Debug, Error)]
pub enum HookwatchError {
    /// Page size outside the accepted range
    #[error("limit must be between 1 and 100, got {0}")]
    InvalidLimit(i64),

    /// Handler generation failed
    #[error("Handler generation error: {0}")]
    Generation(String),
}

impl HookwatchError {
    /// Create a handler generation error
    pub fn generation(msg: impl Into<String>) -> Self {
        HookwatchError::Generation(msg.into())
    }
}
