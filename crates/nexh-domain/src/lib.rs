//! NexH Domain Layer
//!
//! This crate contains the data model shared by every other NexH crate: the
//! business inputs a caller supplies per request, the prompt document handed to
//! the model, the structured result handed back, and the trait boundary to the
//! external completion service.
//!
//! ## Key Concepts
//!
//! - **BusinessContext**: the caller's domain facts; `data` is untrusted display data
//! - **SkillSet**: caller-owned rule blocks, echoed verbatim into prompts
//! - **GlobalContext**: optional benchmark data for the daily briefing
//! - **FieldSpec**: the `(key, label)` contract of an image extraction
//! - **PromptDocument**: the immutable, fully rendered prompt
//! - **StructuredResult**: the parsed reply, or the universal fallback object
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - No I/O; the completion service lives behind [`traits::CompletionProvider`]
//! - Every type is immutable once built and carries no cross-request state

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod field;
pub mod prompt;
pub mod request;
pub mod result;
pub mod schema;
pub mod traits;

// Re-exports for convenience
pub use context::{BusinessContext, GlobalContext, SkillSet};
pub use field::FieldSpec;
pub use prompt::PromptDocument;
pub use request::{Attachment, CompletionRequest, RequestId, JSON_MIME_TYPE};
pub use result::{AnalysisReply, DailyBriefing, StructuredResult, TacticalAction};
pub use schema::ResponseSchema;
