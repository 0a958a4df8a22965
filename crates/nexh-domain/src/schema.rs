//! Expected shapes of model replies

/// Keys of the structured-analysis reply
pub const ANALYSIS_KEYS: [&str; 3] = ["analysis", "recommended_action", "draft_content"];

/// Keys of the daily-briefing reply
pub const BRIEFING_KEYS: [&str; 2] = ["strategy_summary", "tactical_actions"];

/// Optional key carried by fallback results
pub const ERROR_DETAILS_KEY: &str = "error_details";

/// The key enumeration a reply is validated against
///
/// A *strict* schema rejects replies missing any required key. A lenient
/// schema fills missing keys with `null` instead. In both cases keys outside
/// the schema are dropped, so the normalized result carries exactly the
/// declared keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSchema {
    required: Vec<String>,
    optional: Vec<String>,
    strict: bool,
}

impl ResponseSchema {
    /// A strict schema over the given keys
    pub fn strict<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: keys.into_iter().map(Into::into).collect(),
            optional: Vec::new(),
            strict: true,
        }
    }

    /// A lenient schema over the given keys
    pub fn lenient<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strict: false,
            ..Self::strict(keys)
        }
    }

    /// Permit an extra key that may be present but is never required
    pub fn with_optional(mut self, key: impl Into<String>) -> Self {
        self.optional.push(key.into());
        self
    }

    /// `analysis`, `recommended_action`, `draft_content`, optional `error_details`
    pub fn analysis() -> Self {
        Self::strict(ANALYSIS_KEYS).with_optional(ERROR_DETAILS_KEY)
    }

    /// `strategy_summary`, `tactical_actions`
    pub fn briefing() -> Self {
        Self::strict(BRIEFING_KEYS)
    }

    /// Required keys in declaration order
    pub fn required_keys(&self) -> &[String] {
        &self.required
    }

    /// Optional keys in declaration order
    pub fn optional_keys(&self) -> &[String] {
        &self.optional
    }

    /// Whether a missing required key invalidates the reply
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Whether `key` belongs to the schema
    pub fn allows(&self, key: &str) -> bool {
        self.required.iter().chain(&self.optional).any(|k| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_schema() {
        let schema = ResponseSchema::analysis();
        assert!(schema.is_strict());
        assert_eq!(schema.required_keys(), ANALYSIS_KEYS);
        assert!(schema.allows("error_details"));
        assert!(!schema.allows("strategy_summary"));
    }

    #[test]
    fn test_lenient_schema() {
        let schema = ResponseSchema::lenient(["name", "phone"]);
        assert!(!schema.is_strict());
        assert!(schema.allows("phone"));
        assert!(schema.optional_keys().is_empty());
    }
}
