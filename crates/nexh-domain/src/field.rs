//! Field specifications for image extraction

use serde::{Deserialize, Serialize};

/// One `(key, label)` pair of an extraction contract
///
/// `key` becomes a JSON output key; `label` is the human description shown to
/// the model. Uniqueness of keys is enforced where the specs are mapped, not
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// JSON output key
    pub key: String,

    /// Human-readable label
    pub label: String,
}

impl FieldSpec {
    /// Create a field spec
    ///
    /// # Examples
    ///
    /// ```
    /// use nexh_domain::FieldSpec;
    ///
    /// let field = FieldSpec::new("phone", "Mobile number");
    /// assert_eq!(field.key, "phone");
    /// ```
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}
