//! Trait definitions for external interactions
//!
//! The completion service is the only external collaborator of NexH. It is
//! injected through [`CompletionProvider`], so the pipeline can be driven by a
//! deterministic stub in tests and by an HTTP client in production.

use crate::CompletionRequest;
use async_trait::async_trait;
use std::fmt::Display;

/// Trait for submitting a prompt to a hosted completion model
///
/// Implemented by the infrastructure layer (nexh-llm)
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Error type for submissions
    type Error: Display + Send;

    /// Submit a prompt (plus attachments) and return the raw reply text
    ///
    /// Implementations must not interpret the reply; parsing belongs to the
    /// response normalizer.
    async fn submit(&self, request: &CompletionRequest) -> Result<String, Self::Error>;

    /// Name of the model behind this provider, for logs
    fn model_name(&self) -> &str {
        "llm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PromptDocument;

    struct Echo;

    #[async_trait]
    impl CompletionProvider for Echo {
        type Error = String;

        async fn submit(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
            Ok(request.prompt.as_str().to_string())
        }
    }

    #[tokio::test]
    async fn test_provider_object_safety_and_default_name() {
        let provider: Box<dyn CompletionProvider<Error = String>> = Box::new(Echo);
        let reply = provider
            .submit(&CompletionRequest::new(PromptDocument::new("ping")))
            .await
            .unwrap();
        assert_eq!(reply, "ping");
        assert_eq!(provider.model_name(), "llm");
    }
}
