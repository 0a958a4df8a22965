//! Field Mapper: validated extraction contracts

use crate::error::PromptError;
use nexh_domain::{FieldSpec, ResponseSchema};
use std::collections::HashSet;

/// A validated, ordered set of extraction fields
///
/// Produced only by [`map_fields`], so keys are known to be non-blank and
/// unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    fields: Vec<FieldSpec>,
}

impl FieldMapping {
    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    /// `(key, label)` pairs in declaration order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|f| (f.key.as_str(), f.label.as_str()))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a mapping built by [`map_fields`]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The reply schema: exactly these keys, `null` for any the model omits
    pub fn schema(&self) -> ResponseSchema {
        ResponseSchema::lenient(self.keys())
    }
}

/// Validate field specs and build the mapping
///
/// # Errors
///
/// Returns [`PromptError::Validation`] when the spec is empty, a key is empty
/// or whitespace only, or a key appears twice.
///
/// # Examples
///
/// ```
/// use nexh_domain::FieldSpec;
/// use nexh_prompt::map_fields;
///
/// let mapping = map_fields(&[
///     FieldSpec::new("name", "Customer name"),
///     FieldSpec::new("phone", "Mobile"),
/// ])
/// .unwrap();
/// assert_eq!(mapping.keys().collect::<Vec<_>>(), ["name", "phone"]);
///
/// assert!(map_fields(&[FieldSpec::new("name", "A"), FieldSpec::new("name", "B")]).is_err());
/// ```
pub fn map_fields(spec: &[FieldSpec]) -> Result<FieldMapping, PromptError> {
    if spec.is_empty() {
        return Err(PromptError::Validation(
            "field spec must contain at least one field".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for (idx, field) in spec.iter().enumerate() {
        if field.key.trim().is_empty() {
            return Err(PromptError::Validation(format!("field {} has an empty key", idx)));
        }
        if !seen.insert(field.key.as_str()) {
            return Err(PromptError::Validation(format!(
                "duplicate field key '{}'",
                field.key
            )));
        }
    }

    Ok(FieldMapping {
        fields: spec.to_vec(),
    })
}
