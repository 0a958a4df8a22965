//! Sanitize → render → submit → normalize

use crate::config::PromptConfig;
use crate::error::PromptError;
use crate::normalizer::{build_fallback, normalize};
use crate::template::TemplateKind;
use crate::types::{AnalysisInput, BriefingInput, ExtractionInput, RenderedPrompt};
use nexh_domain::traits::CompletionProvider;
use nexh_domain::{Attachment, CompletionRequest, RequestId, StructuredResult};
use nexh_guard::{mask_json, Masked};
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Runs one template against a completion provider
///
/// Holds no per-request state, so one pipeline can serve concurrent requests.
/// Every failure after rendering (provider error, timeout, unusable reply)
/// becomes the fallback result; only input errors are returned as `Err`.
pub struct Pipeline<P>
where
    P: CompletionProvider,
{
    provider: P,
    config: PromptConfig,
}

impl<P> Pipeline<P>
where
    P: CompletionProvider,
{
    /// Create a pipeline
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Config`] when the configuration is invalid.
    pub fn new(provider: P, config: PromptConfig) -> Result<Self, PromptError> {
        config.validate().map_err(PromptError::Config)?;
        Ok(Self { provider, config })
    }

    /// Create a pipeline with the default configuration
    pub fn with_defaults(provider: P) -> Self {
        Self {
            provider,
            config: PromptConfig::default(),
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Render a template without submitting it
    pub fn render(&self, template: &TemplateKind) -> Result<RenderedPrompt, PromptError> {
        template.render(&self.config)
    }

    /// Structured analysis of business data
    pub async fn analyze(&self, input: &AnalysisInput) -> Result<StructuredResult, PromptError> {
        let data = mask_json(&serde_json::Value::Object(input.context.data.clone()));
        debug!(%data, "Analysis input");
        self.run(&TemplateKind::StructuredAnalysis(input.clone()), Vec::new())
            .await
    }

    /// Extract fields from an image
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Validation`] for a malformed field spec, before
    /// anything is submitted.
    pub async fn extract_image(
        &self,
        input: &ExtractionInput,
        image: Attachment,
    ) -> Result<StructuredResult, PromptError> {
        debug!(mime_type = %image.mime_type, bytes = image.data.len(), "Extraction input");
        self.run(&TemplateKind::ImageExtraction(input.clone()), vec![image])
            .await
    }

    /// Daily strategic briefing
    pub async fn daily_briefing(&self, input: &BriefingInput) -> Result<StructuredResult, PromptError> {
        let data = mask_json(&serde_json::Value::Object(input.context.data.clone()));
        debug!(%data, "Briefing input");
        self.run(&TemplateKind::DailyBriefing(input.clone()), Vec::new())
            .await
    }

    /// Render, submit with attachments, and normalize against the template's schema
    pub async fn run(
        &self,
        template: &TemplateKind,
        attachments: Vec<Attachment>,
    ) -> Result<StructuredResult, PromptError> {
        let request_id = RequestId::new();
        let start = Instant::now();

        let rendered = template.render(&self.config)?;

        info!(
            %request_id,
            template = template.name(),
            model = self.provider.model_name(),
            prompt_len = rendered.document.len(),
            attachments = attachments.len(),
            "Submitting prompt"
        );
        if self.config.log_prompts {
            debug!(%request_id, prompt = %Masked(rendered.document.as_str()), "Rendered prompt");
        }

        let mut request = CompletionRequest::new(rendered.document);
        request.attachments = attachments;

        let result = match self.submit(&request).await {
            Ok(reply) => {
                debug!(%request_id, reply_len = reply.len(), "Reply received");
                if self.config.log_prompts {
                    debug!(%request_id, reply = %Masked(&reply), "Raw reply");
                }
                normalize(&reply, &rendered.schema)
            }
            Err(e) => {
                warn!(%request_id, error = %Masked(&e.to_string()), "Submission failed, using fallback");
                build_fallback(e.to_string())
            }
        };

        info!(
            %request_id,
            fallback = result.is_fallback(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Request complete"
        );

        Ok(result)
    }

    async fn submit(&self, request: &CompletionRequest) -> Result<String, PromptError> {
        timeout(self.config.submit_timeout(), self.provider.submit(request))
            .await
            .map_err(|_| PromptError::Timeout(self.config.submit_timeout_secs))?
            .map_err(|e| PromptError::Llm(e.to_string()))
    }
}
