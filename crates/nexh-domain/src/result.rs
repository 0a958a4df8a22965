//! Parsed model replies

use crate::schema::ERROR_DETAILS_KEY;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `analysis` value of every fallback result
pub const FALLBACK_ANALYSIS: &str = "System Logic Error";

/// `recommended_action` value of every fallback result
pub const FALLBACK_ACTION: &str = "Review internal logs.";

/// A validated model reply, or the universal fallback object
///
/// Serializes as a plain JSON object. The only ways to build one are the
/// schema-checked path in the normalizer and [`StructuredResult::fallback`],
/// so a caller holding a `StructuredResult` always holds a well-formed object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StructuredResult(Map<String, Value>);

impl StructuredResult {
    /// Wrap an object that has already been checked against its schema
    pub fn from_validated(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The universal fallback object
    ///
    /// # Examples
    ///
    /// ```
    /// use nexh_domain::StructuredResult;
    ///
    /// let result = StructuredResult::fallback("timeout");
    /// assert!(result.is_fallback());
    /// assert_eq!(result.error_details(), Some("timeout"));
    /// assert!(result.get("draft_content").unwrap().is_null());
    /// ```
    pub fn fallback(error_message: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("analysis".to_string(), Value::from(FALLBACK_ANALYSIS));
        fields.insert("recommended_action".to_string(), Value::from(FALLBACK_ACTION));
        fields.insert("draft_content".to_string(), Value::Null);
        fields.insert(ERROR_DETAILS_KEY.to_string(), Value::from(error_message.into()));
        Self(fields)
    }

    /// Whether this is the fallback object
    pub fn is_fallback(&self) -> bool {
        self.0.get("analysis").and_then(Value::as_str) == Some(FALLBACK_ANALYSIS)
            && self.0.contains_key(ERROR_DETAILS_KEY)
    }

    /// `error_details`, when present
    pub fn error_details(&self) -> Option<&str> {
        self.0.get(ERROR_DETAILS_KEY).and_then(Value::as_str)
    }

    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All fields
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Field names
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Convert into a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Decode into a typed reply view
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0.clone()))
    }
}

/// Typed view of a structured-analysis reply (and of the fallback object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReply {
    /// Short reasoning summary
    pub analysis: String,

    /// Clear next step
    pub recommended_action: String,

    /// Actionable message, if any
    pub draft_content: Option<String>,

    /// Present only on fallback results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

/// Typed view of a daily-briefing reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBriefing {
    /// One-sentence summary
    pub strategy_summary: String,

    /// Ordered actions, most important first
    pub tactical_actions: Vec<TacticalAction>,
}

/// One outreach action proposed by a briefing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticalAction {
    /// Client id taken from the strategic candidates
    pub target_client_id: String,

    /// Client name
    #[serde(default)]
    pub target_client_name: String,

    /// Client phone, empty when unknown
    #[serde(default)]
    pub target_client_phone: String,

    /// Action title
    pub title: String,

    /// Why this action
    pub reason: String,

    /// Personalized outreach message
    pub draft_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_shape() {
        let result = StructuredResult::fallback("boom");
        assert_eq!(
            result.clone().into_value(),
            json!({
                "analysis": "System Logic Error",
                "recommended_action": "Review internal logs.",
                "draft_content": null,
                "error_details": "boom"
            })
        );
        assert!(result.is_fallback());
    }

    #[test]
    fn test_fallback_decodes_as_analysis_reply() {
        let reply: AnalysisReply = StructuredResult::fallback("boom").decode().unwrap();
        assert_eq!(reply.analysis, FALLBACK_ANALYSIS);
        assert_eq!(reply.draft_content, None);
        assert_eq!(reply.error_details.as_deref(), Some("boom"));
    }

    #[test]
    fn test_validated_result_is_not_fallback() {
        let fields = json!({"analysis": "ok", "recommended_action": "x", "draft_content": null});
        let result = StructuredResult::from_validated(fields.as_object().unwrap().clone());
        assert!(!result.is_fallback());
        assert!(result.error_details().is_none());
        assert_eq!(result.keys().count(), 3);
    }

    #[test]
    fn test_briefing_decodes() {
        let fields = json!({
            "strategy_summary": "Retention is slipping.",
            "tactical_actions": [{
                "target_client_id": "c-17",
                "target_client_name": "Sarah Lee",
                "title": "Win-back offer",
                "reason": "75 days absent",
                "draft_content": "Hi Sarah!"
            }]
        });
        let result = StructuredResult::from_validated(fields.as_object().unwrap().clone());
        let briefing: DailyBriefing = result.decode().unwrap();
        assert_eq!(briefing.tactical_actions.len(), 1);
        assert_eq!(briefing.tactical_actions[0].target_client_phone, "");
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let result = StructuredResult::fallback("x");
        let text = serde_json::to_string(&result).unwrap();
        assert!(text.starts_with('{'));
        assert!(text.contains("\"error_details\":\"x\""));
    }
}
