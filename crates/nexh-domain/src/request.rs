//! Submission requests and request identifiers

use crate::PromptDocument;
use std::fmt;

/// MIME type every NexH request declares for the model reply
pub const JSON_MIME_TYPE: &str = "application/json";

/// Unique identifier for one request, based on UUIDv7
///
/// Used only to correlate log lines of a single sanitize → render → submit →
/// normalize run. UUIDv7 sorts chronologically, so log readers can order
/// requests by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u128);

impl RequestId {
    /// Generate a new UUIDv7-based RequestId
    ///
    /// # Examples
    ///
    /// ```
    /// use nexh_domain::RequestId;
    ///
    /// let id = RequestId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a RequestId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Milliseconds since Unix epoch at which the id was generated
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Binary data sent alongside a prompt, e.g. a photographed business card
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Raw bytes
    pub data: Vec<u8>,

    /// MIME type, e.g. `image/jpeg`
    pub mime_type: String,
}

impl Attachment {
    /// Create an attachment
    pub fn new(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }
}

impl fmt::Debug for Attachment {
    // Image bytes are neither useful nor safe in debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Everything a completion provider receives for one submission
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The rendered prompt
    pub prompt: PromptDocument,

    /// Binary attachments, in order
    pub attachments: Vec<Attachment>,

    /// Declared content type of the reply
    pub response_mime_type: String,
}

impl CompletionRequest {
    /// Create a text-only request expecting a JSON reply
    pub fn new(prompt: PromptDocument) -> Self {
        Self {
            prompt,
            attachments: Vec::new(),
            response_mime_type: JSON_MIME_TYPE.to_string(),
        }
    }

    /// Attach binary data
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}
