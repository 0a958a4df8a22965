//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use nexh_domain::StructuredResult;
use nexh_prompt::RenderedPrompt;
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a normalized reply.
    pub fn format_result(&self, result: &StructuredResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_result_table(result)),
            OutputFormat::Quiet => Ok(serde_json::to_string(result)?),
        }
    }

    fn format_result_table(&self, result: &StructuredResult) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, value) in result.fields() {
            builder.push_record([key.clone(), display_value(value)]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        if result.is_fallback() {
            format!("{}\n{}", self.warning("Fallback result"), table)
        } else {
            table.to_string()
        }
    }

    /// Format a rendered prompt.
    ///
    /// JSON output carries the prompt and the expected reply keys; the other
    /// formats print the prompt text as the model will see it.
    pub fn format_prompt(&self, rendered: &RenderedPrompt) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "prompt": rendered.document.as_str(),
                    "keys": rendered.schema.required_keys(),
                    "strict": rendered.schema.is_strict(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table | OutputFormat::Quiet => Ok(rendered.document.to_string()),
        }
    }

    /// Format plain text output.
    pub fn format_text(&self, text: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(text)?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(text.to_string()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Strings unquoted, everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexh_domain::ResponseSchema;
    use nexh_prompt::normalize;

    fn analysis() -> StructuredResult {
        normalize(
            r#"{"analysis": "At risk", "recommended_action": "Call today", "draft_content": null}"#,
            &ResponseSchema::analysis(),
        )
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_result(&analysis()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["recommended_action"], "Call today");
        assert!(value["draft_content"].is_null());
    }

    #[test]
    fn test_quiet_format_is_single_line() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_result(&analysis()).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_result(&analysis()).unwrap();
        assert!(output.contains("Field"));
        assert!(output.contains("Call today"));
        assert!(output.contains("null"));
        assert!(!output.contains("Fallback"));
    }

    #[test]
    fn test_table_flags_fallback() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_result(&StructuredResult::fallback("timeout"))
            .unwrap();
        assert!(output.starts_with("⚠ Fallback result"));
        assert!(output.contains("System Logic Error"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }

    #[test]
    fn test_format_text_json_escapes() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        assert_eq!(formatter.format_text("a\"b").unwrap(), r#""a\"b""#);
    }
}
