//! Response Normalizer: raw model reply → [`StructuredResult`]

use crate::error::PromptError;
use nexh_domain::{ResponseSchema, StructuredResult};
use nexh_guard::{mask_pii, Masked};
use serde_json::{Map, Value};
use tracing::warn;

/// Parse a reply against `schema`, falling back instead of failing
///
/// # Examples
///
/// ```
/// use nexh_domain::ResponseSchema;
/// use nexh_prompt::normalize;
///
/// let reply = "```json\n{\"analysis\": \"a\", \"recommended_action\": \"b\", \"draft_content\": null}\n```";
/// let result = normalize(reply, &ResponseSchema::analysis());
/// assert!(!result.is_fallback());
///
/// let result = normalize("not json at all", &ResponseSchema::analysis());
/// assert!(result.is_fallback());
/// ```
pub fn normalize(raw_reply: &str, schema: &ResponseSchema) -> StructuredResult {
    match parse_reply(raw_reply, schema) {
        Ok(result) => result,
        Err(e) => {
            let error = e.to_string();
            warn!(error = %Masked(&error), reply_len = raw_reply.len(), "Reply rejected, using fallback");
            build_fallback(error)
        }
    }
}

/// Parse a reply against `schema`, reporting why it was rejected
///
/// Keys outside the schema are dropped. A strict schema rejects a reply that
/// misses a required key; a lenient one fills it with `null`.
pub fn parse_reply(raw_reply: &str, schema: &ResponseSchema) -> Result<StructuredResult, PromptError> {
    let body = strip_code_fence(raw_reply);
    let value: Value = serde_json::from_str(body)?;

    let mut object = match value {
        Value::Object(object) => object,
        other => {
            return Err(PromptError::InvalidFormat(format!(
                "Expected a JSON object, got {}",
                kind(&other)
            )))
        }
    };

    let mut fields = Map::new();
    for key in schema.required_keys() {
        match object.remove(key) {
            Some(v) => {
                fields.insert(key.clone(), v);
            }
            None if schema.is_strict() => {
                return Err(PromptError::InvalidFormat(format!(
                    "Missing required key '{}'",
                    key
                )));
            }
            None => {
                fields.insert(key.clone(), Value::Null);
            }
        }
    }
    for key in schema.optional_keys() {
        if let Some(v) = object.remove(key) {
            fields.insert(key.clone(), v);
        }
    }

    Ok(StructuredResult::from_validated(fields))
}

/// The universal fallback object, with PII masked out of the message
pub fn build_fallback(message: impl AsRef<str>) -> StructuredResult {
    StructuredResult::fallback(mask_pii(message.as_ref()))
}

/// Trim a reply and drop a surrounding triple-backtick fence
///
/// The opening fence may carry a language tag (```` ```json ````). Either fence
/// is removed when present on its own, so a reply with no fence comes back
/// trimmed and otherwise unchanged.
pub fn strip_code_fence(reply: &str) -> &str {
    let mut body = reply.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexh_domain::AnalysisReply;
    use serde_json::json;

    const ANALYSIS: &str = r#"{"analysis": "Dormant for 75 days", "recommended_action": "Send a comeback offer", "draft_content": "Hi Sarah, 10% off this week!"}"#;

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```JSON\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("  ```json{}```  "), "{}");
        assert_eq!(strip_code_fence("{}\n```"), "{}");
        assert_eq!(strip_code_fence("```json\n{}"), "{}");
        assert_eq!(strip_code_fence(" \n{} \n"), "{}");
    }

    #[test]
    fn test_fenced_reply_parses_unchanged() {
        let fenced = format!("```json\n{}\n```", ANALYSIS);
        let expected: Value = serde_json::from_str(ANALYSIS).unwrap();

        let result = normalize(&fenced, &ResponseSchema::analysis());
        assert_eq!(result.clone().into_value(), expected);
        assert_eq!(result, normalize(ANALYSIS, &ResponseSchema::analysis()));
    }

    #[test]
    fn test_not_json_falls_back() {
        let result = normalize("not json at all", &ResponseSchema::analysis());
        assert!(result.is_fallback());
        assert_eq!(result.get("draft_content"), Some(&Value::Null));
        assert_eq!(result.get("analysis"), Some(&json!("System Logic Error")));
        assert_eq!(result.get("recommended_action"), Some(&json!("Review internal logs.")));
        let details = result.error_details().unwrap();
        assert!(details.starts_with("JSON parse error"));
    }

    #[test]
    fn test_empty_reply_falls_back() {
        assert!(normalize("", &ResponseSchema::analysis()).is_fallback());
        assert!(normalize("```json\n```", &ResponseSchema::analysis()).is_fallback());
    }

    #[test]
    fn test_non_object_falls_back() {
        let result = normalize("[1, 2, 3]", &ResponseSchema::analysis());
        assert!(result.is_fallback());
        assert!(result.error_details().unwrap().contains("got an array"));
    }

    #[test]
    fn test_strict_missing_key_falls_back() {
        let result = normalize(r#"{"analysis": "x"}"#, &ResponseSchema::analysis());
        assert!(result.is_fallback());
        assert!(result
            .error_details()
            .unwrap()
            .contains("'recommended_action'"));
    }

    #[test]
    fn test_extra_keys_dropped_optional_kept() {
        let reply = r#"{"analysis": "a", "recommended_action": "b", "draft_content": null,
                        "error_details": "partial", "confidence": 0.9}"#;
        let result = normalize(reply, &ResponseSchema::analysis());
        let keys: Vec<&str> = result.keys().collect();
        assert_eq!(keys.len(), 4);
        assert!(result.get("confidence").is_none());
        assert_eq!(result.error_details(), Some("partial"));
    }

    #[test]
    fn test_lenient_schema_fills_nulls() {
        let schema = ResponseSchema::lenient(["name", "phone", "notes"]);
        let result = normalize(r#"{"name": "Sarah Lee", "company": "Acme"}"#, &schema);
        assert!(!result.is_fallback());
        assert_eq!(
            result.into_value(),
            json!({"name": "Sarah Lee", "phone": null, "notes": null})
        );
    }

    #[test]
    fn test_normalized_reply_decodes() {
        let result = normalize(ANALYSIS, &ResponseSchema::analysis());
        let reply: AnalysisReply = result.decode().unwrap();
        assert_eq!(reply.recommended_action, "Send a comeback offer");
    }

    #[test]
    fn test_fallback_message_is_masked() {
        let result = build_fallback("HTTP 500: no such user sarah@example.com / 01012345678");
        assert_eq!(
            result.error_details(),
            Some("HTTP 500: no such user [EMAIL_MASKED] / [PHONE_MASKED]")
        );
    }
}
