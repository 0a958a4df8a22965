//! Image-extraction prompt
//!
//! The prompt describes the fields to read from an attached image. The image
//! travels separately as a request attachment.

use crate::config::PromptConfig;
use crate::error::PromptError;
use crate::fields::{map_fields, FieldMapping};
use crate::template::{literal_or, QUOTED_VALUES_NOTICE};
use crate::types::{ExtractionInput, RenderedPrompt};
use nexh_domain::PromptDocument;
use nexh_guard::clean_input;
use serde_json::Value;

const MATCHING_RULES: &str = r#"[MATCHING RULES]
1. "name" field: Person names, customer names
2. "phone" field: Phone/mobile numbers (normalize to digits only)
3. "notes" field: All other text (services, dates, descriptions)
"#;

pub(crate) fn render(input: &ExtractionInput, config: &PromptConfig) -> Result<RenderedPrompt, PromptError> {
    let mapping = map_fields(&input.fields)?;
    let mut prompt = String::new();

    prompt.push_str("[ROLE]\n");
    prompt.push_str(&format!(
        "You are an expert OCR Assistant for the {} industry.\n\n",
        literal_or(Some(input.industry.as_str()), &config.default_industry)
    ));

    prompt.push_str("[TASK]\n");
    prompt.push_str("Extract ALL text from the attached image and match it to these fields:\n");
    prompt.push_str(&field_table(&mapping));
    prompt.push_str(&format!("{}\n\n", QUOTED_VALUES_NOTICE));

    prompt.push_str(MATCHING_RULES);
    prompt.push('\n');

    let keys: Vec<Value> = mapping.keys().map(Value::from).collect();
    prompt.push_str("[OUTPUT]\n");
    prompt.push_str(&format!(
        "Return STRICT JSON with exact keys: {}\n",
        Value::Array(keys)
    ));
    prompt.push_str("If a field is not found, return null for that field. No markdown, no commentary.\n");

    Ok(RenderedPrompt {
        document: PromptDocument::new(prompt),
        schema: mapping.schema(),
    })
}

/// `{ "key": "label", ... }` in declaration order, labels cleaned
fn field_table(mapping: &FieldMapping) -> String {
    let rows: Vec<String> = mapping
        .pairs()
        .map(|(key, label)| {
            format!(
                "  {}: {}",
                Value::from(key),
                Value::from(clean_input(label))
            )
        })
        .collect();
    format!("{{\n{}\n}}\n", rows.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexh_domain::FieldSpec;

    fn card_input() -> ExtractionInput {
        ExtractionInput::new(
            "Beauty Salon",
            vec![
                FieldSpec::new("phone", "Mobile <b>number</b>"),
                FieldSpec::new("name", "Customer name"),
                FieldSpec::new("notes", "Everything else"),
            ],
        )
    }

    fn rendered(input: &ExtractionInput) -> String {
        render(input, &PromptConfig::default())
            .unwrap()
            .document
            .into_string()
    }

    #[test]
    fn test_field_table_keeps_spec_order() {
        let prompt = rendered(&card_input());
        let table = "{\n  \"phone\": \"Mobile number\",\n  \"name\": \"Customer name\",\n  \"notes\": \"Everything else\"\n}\n";
        assert!(prompt.contains(table));
    }

    #[test]
    fn test_closing_instruction_lists_exact_keys() {
        let prompt = rendered(&card_input());
        assert!(prompt.contains(r#"Return STRICT JSON with exact keys: ["phone","name","notes"]"#));
        assert!(prompt.contains("return null for that field"));
    }

    #[test]
    fn test_sections_and_rules_in_order() {
        let prompt = rendered(&card_input());
        let role = prompt.find("[ROLE]").unwrap();
        let task = prompt.find("[TASK]").unwrap();
        let rules = prompt.find("[MATCHING RULES]").unwrap();
        let output = prompt.find("[OUTPUT]").unwrap();
        assert!(role < task && task < rules && rules < output);

        let name_rule = prompt.find("1. \"name\"").unwrap();
        let phone_rule = prompt.find("2. \"phone\"").unwrap();
        let notes_rule = prompt.find("3. \"notes\"").unwrap();
        assert!(name_rule < phone_rule && phone_rule < notes_rule);
        assert!(prompt.contains("normalize to digits only"));
    }

    #[test]
    fn test_field_table_followed_by_data_notice() {
        let prompt = rendered(&card_input());
        let table_end = prompt.find("}\n").unwrap();
        let notice = prompt.find(QUOTED_VALUES_NOTICE).unwrap();
        assert!(table_end < notice && notice < prompt.find("[MATCHING RULES]").unwrap());
    }

    #[test]
    fn test_industry_is_cleaned_and_quoted() {
        let mut input = card_input();
        input.industry = " <i>Dental</i> Clinic ".to_string();
        assert!(rendered(&input).contains("for the \"Dental Clinic\" industry."));
    }

    #[test]
    fn test_schema_matches_fields() {
        let out = render(&card_input(), &PromptConfig::default()).unwrap();
        assert_eq!(out.schema.required_keys(), ["phone", "name", "notes"]);
        assert!(!out.schema.is_strict());
    }

    #[test]
    fn test_duplicate_key_produces_no_prompt() {
        let input = ExtractionInput::new(
            "Salon",
            vec![FieldSpec::new("name", "Name"), FieldSpec::new("name", "Other")],
        );
        assert!(matches!(
            render(&input, &PromptConfig::default()),
            Err(PromptError::Validation(_))
        ));
    }
}
