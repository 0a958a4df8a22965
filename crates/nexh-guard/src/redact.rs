//! Log-safe views of text and JSON values

use crate::sanitizer::mask_pii;
use serde_json::{Map, Value};
use std::fmt;

/// Display wrapper that masks PII when formatted
///
/// Meant for `tracing` fields, so masking is applied only when a log line is
/// actually emitted:
///
/// ```
/// use nexh_guard::Masked;
///
/// let line = format!("reply: {}", Masked("call 0212345678"));
/// assert_eq!(line, "reply: call [PHONE_MASKED]");
/// ```
pub struct Masked<'a>(pub &'a str);

impl fmt::Display for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_pii(self.0))
    }
}

impl fmt::Debug for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", mask_pii(self.0))
    }
}

/// Mask every string in a JSON value, object keys included
///
/// Numbers are masked too when their decimal form is a standalone 8–15 digit
/// run, since phone numbers frequently arrive as JSON integers.
pub fn mask_json(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(mask_pii(s)),
        Value::Number(n) => {
            let text = n.to_string();
            let masked = mask_pii(&text);
            if masked == text {
                value.clone()
            } else {
                Value::String(masked)
            }
        }
        Value::Array(items) => Value::Array(items.iter().map(mask_json).collect()),
        Value::Object(map) => {
            let masked: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (mask_pii(k), mask_json(v)))
                .collect();
            Value::Object(masked)
        }
        Value::Null | Value::Bool(_) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_masked_display_and_debug() {
        assert_eq!(format!("{}", Masked("a@b.com")), "[EMAIL_MASKED]");
        assert_eq!(format!("{:?}", Masked("a@b.com")), "\"[EMAIL_MASKED]\"");
    }

    #[test]
    fn test_mask_json_nested() {
        let value = json!({
            "customer": {"email": "sarah@example.com", "visits": 4},
            "phones": ["01012345678", 821012345678u64],
            "vip": true,
            "note": null
        });
        let masked = mask_json(&value);
        assert_eq!(
            masked,
            json!({
                "customer": {"email": "[EMAIL_MASKED]", "visits": 4},
                "phones": ["[PHONE_MASKED]", "[PHONE_MASKED]"],
                "vip": true,
                "note": null
            })
        );
    }

    #[test]
    fn test_mask_json_keys() {
        let value = json!({"sarah@example.com": 1});
        let masked = mask_json(&value);
        assert!(masked.get("[EMAIL_MASKED]").is_some());
    }

    #[test]
    fn test_mask_json_leaves_small_numbers() {
        assert_eq!(mask_json(&json!(75)), json!(75));
        assert_eq!(mask_json(&json!(12.5)), json!(12.5));
    }
}
