//! NexH LLM Provider Layer
//!
//! Implementations of the `CompletionProvider` trait from `nexh-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic canned replies for testing, including
//!   malformed replies, failures and slow responses
//! - `FnProvider`: Adapts any closure into a provider
//! - `OllamaProvider`: Ollama HTTP API with image attachments and JSON mode
//!
//! # Examples
//!
//! ```
//! use nexh_domain::traits::CompletionProvider;
//! use nexh_domain::{CompletionRequest, PromptDocument};
//! use nexh_llm::MockProvider;
//!
//! # tokio_test_block(async {
//! let provider = MockProvider::new(r#"{"analysis":"ok"}"#);
//! let reply = provider
//!     .submit(&CompletionRequest::new(PromptDocument::new("test prompt")))
//!     .await
//!     .unwrap();
//! assert_eq!(reply, r#"{"analysis":"ok"}"#);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

#![warn(missing_docs)]

pub mod fn_provider;
pub mod ollama;

use async_trait::async_trait;
use nexh_domain::traits::CompletionProvider;
use nexh_domain::CompletionRequest;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use thiserror::Error;

pub use fn_provider::FnProvider;
pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response envelope from the provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum Canned {
    Reply(String),
    Failure(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured replies without making any network calls. Replies
/// are chosen by the first registered needle contained in the prompt, falling
/// back to the default reply. Every submitted request is recorded.
///
/// # Examples
///
/// ```
/// use nexh_llm::MockProvider;
///
/// let mut provider = MockProvider::new("not json at all");
/// provider.add_response("CO-STAR", r#"{"analysis":"ok"}"#);
/// provider.add_error("OCR");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: String,
    canned: Arc<Mutex<Vec<(String, Canned)>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    delay: Option<Duration>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed reply for all prompts
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            default_reply: reply.into(),
            canned: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Reply with `reply` whenever the prompt contains `needle`
    pub fn add_response(&mut self, needle: impl Into<String>, reply: impl Into<String>) {
        lock(&self.canned).push((needle.into(), Canned::Reply(reply.into())));
    }

    /// Fail whenever the prompt contains `needle`
    pub fn add_error(&mut self, needle: impl Into<String>) {
        lock(&self.canned).push((needle.into(), Canned::Failure("Mock error".to_string())));
    }

    /// Sleep before every reply, e.g. to exercise timeouts
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of submissions so far
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Copies of every submitted request, in order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        lock(&self.requests).clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    type Error = LlmError;

    async fn submit(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        lock(&self.requests).push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let matched = lock(&self.canned)
            .iter()
            .find(|(needle, _)| request.prompt.as_str().contains(needle.as_str()))
            .map(|(_, canned)| canned.clone());

        match matched {
            Some(Canned::Reply(reply)) => Ok(reply),
            Some(Canned::Failure(message)) => Err(LlmError::Other(message)),
            None => Ok(self.default_reply.clone()),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking test thread must not take the other tests down with it.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
