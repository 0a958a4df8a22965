//! Closure-backed provider

use async_trait::async_trait;
use nexh_domain::traits::CompletionProvider;
use nexh_domain::CompletionRequest;
use std::fmt::Display;
use std::marker::PhantomData;

/// Adapts a synchronous closure into a [`CompletionProvider`]
///
/// Handy for one-off stubs whose reply depends on the request.
///
/// ```
/// use nexh_domain::CompletionRequest;
/// use nexh_llm::FnProvider;
///
/// let provider = FnProvider::new(|request: &CompletionRequest| {
///     Ok::<_, String>(format!(r#"{{"images": {}}}"#, request.attachments.len()))
/// });
/// ```
pub struct FnProvider<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> FnProvider<F, E>
where
    F: Fn(&CompletionRequest) -> Result<String, E> + Send + Sync,
    E: Display + Send,
{
    /// Wrap a closure
    pub fn new(f: F) -> Self {
        Self {
            f,
            _error: PhantomData,
        }
    }
}

#[async_trait]
impl<F, E> CompletionProvider for FnProvider<F, E>
where
    F: Fn(&CompletionRequest) -> Result<String, E> + Send + Sync,
    E: Display + Send,
{
    type Error = E;

    async fn submit(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        (self.f)(request)
    }

    fn model_name(&self) -> &str {
        "fn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexh_domain::PromptDocument;

    #[tokio::test]
    async fn test_fn_provider_echoes_prompt_length() {
        let provider = FnProvider::new(|r: &CompletionRequest| {
            Ok::<_, String>(r.prompt.len().to_string())
        });
        let reply = provider
            .submit(&CompletionRequest::new(PromptDocument::new("abcd")))
            .await
            .unwrap();
        assert_eq!(reply, "4");
        assert_eq!(provider.model_name(), "fn");
    }

    #[tokio::test]
    async fn test_fn_provider_error() {
        let provider = FnProvider::new(|_: &CompletionRequest| Err::<String, _>("down".to_string()));
        let err = provider
            .submit(&CompletionRequest::new(PromptDocument::new("x")))
            .await
            .unwrap_err();
        assert_eq!(err, "down");
    }
}
