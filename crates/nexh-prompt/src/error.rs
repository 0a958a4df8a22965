//! Error types for prompt construction and reply handling

use thiserror::Error;

/// Errors that can occur while building prompts or handling replies
///
/// Only [`PromptError::Validation`] and [`PromptError::Config`] ever reach
/// callers of the pipeline; the rest are folded into the fallback result.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Malformed caller input, e.g. a duplicated field key
    #[error("Validation error: {0}")]
    Validation(String),

    /// Completion provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Submission timeout
    #[error("Completion timed out after {0}s")]
    Timeout(u64),

    /// Reply parsed but does not match the expected shape
    #[error("Invalid reply format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PromptError {
    fn from(e: serde_json::Error) -> Self {
        PromptError::JsonParse(e.to_string())
    }
}
