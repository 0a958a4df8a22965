//! Markup stripping and PII masking

use regex::Regex;
use std::sync::LazyLock;

/// Replacement for every email-shaped token
pub const EMAIL_PLACEHOLDER: &str = "[EMAIL_MASKED]";

/// Replacement for every standalone 8–15 digit run
pub const PHONE_PLACEHOLDER: &str = "[PHONE_MASKED]";

/// Anything between angle brackets, e.g. `<system>` or `</instructions>`
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Local part and domain of word characters, dots or hyphens
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+").expect("valid email regex"));

/// 8–15 digits with a word boundary on both sides, so digits inside longer
/// alphanumeric identifiers (`ORD12345678`) are left alone
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{8,15}\b").expect("valid phone regex"));

/// Remove markup tags and trim surrounding whitespace
///
/// Empty input yields an empty string.
pub fn clean_input(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    TAG_PATTERN.replace_all(text, "").trim().to_string()
}

/// [`clean_input`] for optional fields; `None` yields an empty string
pub fn clean_optional(text: Option<&str>) -> String {
    text.map(clean_input).unwrap_or_default()
}

/// Mask emails, then standalone 8–15 digit runs
///
/// Idempotent: both placeholders open with `[` and close with `]`, so neither
/// can become part of a later email or digit-run match.
pub fn mask_pii(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let masked = EMAIL_PATTERN.replace_all(text, EMAIL_PLACEHOLDER);
    PHONE_PATTERN
        .replace_all(&masked, PHONE_PLACEHOLDER)
        .into_owned()
}
