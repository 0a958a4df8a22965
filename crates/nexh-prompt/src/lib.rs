//! NexH Prompt
//!
//! Builds role-scoped prompts from untrusted business data and turns the
//! model's reply into a [`StructuredResult`](nexh_domain::StructuredResult)
//! callers can always rely on.
//!
//! # Architecture
//!
//! ```text
//! caller → clean_input → TemplateKind::render → CompletionProvider::submit → normalize → caller
//!                              ↑
//!                         map_fields (image extraction only)
//! ```
//!
//! # Templates
//!
//! - **Structured analysis**: CO-STAR layout, answer keys `analysis`,
//!   `recommended_action`, `draft_content`
//! - **Image extraction**: caller-defined fields read from an attached image
//! - **Daily briefing**: strategy summary plus tactical actions, with optional
//!   benchmarks from the leading market
//!
//! # Example Usage
//!
//! ```
//! use nexh_domain::BusinessContext;
//! use nexh_llm::MockProvider;
//! use nexh_prompt::{AnalysisInput, Pipeline};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(
//!     r#"{"analysis": "At risk", "recommended_action": "Call", "draft_content": null}"#,
//! );
//! let pipeline = Pipeline::with_defaults(llm);
//!
//! let input = AnalysisInput::new(
//!     BusinessContext::new("Beauty Salon"),
//!     "Analyze customer retention risk",
//!     "Salon owner",
//! );
//! let result = pipeline.analyze(&input).await?;
//! assert!(!result.is_fallback());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod briefing;
mod config;
mod costar;
mod error;
mod extraction;
mod fields;
mod normalizer;
mod pipeline;
mod template;
mod types;


pub use config::PromptConfig;
pub use error::PromptError;
pub use fields::{map_fields, FieldMapping};
pub use normalizer::{build_fallback, normalize, parse_reply, strip_code_fence};
pub use pipeline::Pipeline;
pub use template::{canonical_json, TemplateKind};
pub use types::{AnalysisInput, BriefingInput, ExtractionInput, RenderedPrompt};
