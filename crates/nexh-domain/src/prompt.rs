//! The rendered prompt handed to the model

use std::fmt;

/// A fully rendered prompt
///
/// Immutable once built: there is no mutable access to the text, and NexH
/// never re-sanitizes a document after rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptDocument(String);

impl PromptDocument {
    /// Wrap rendered text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The prompt text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the document, returning its text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PromptDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
