//! Structured-analysis prompt in the CO-STAR layout
//!
//! Context, Objective, Style, Tone, Audience, Response, always in that order.

use crate::config::PromptConfig;
use crate::error::PromptError;
use crate::template::{
    compact_json, data_block, json_only_instruction, literal, literal_or, QUOTED_VALUES_NOTICE,
};
use crate::types::{AnalysisInput, RenderedPrompt};
use nexh_domain::schema::ANALYSIS_KEYS;
use nexh_domain::{PromptDocument, ResponseSchema};
use serde_json::Value;

const STYLE: &str = "Professional, Analytical, Data-Driven.";

const TONE: &str = "Objective, Helper, \"Auditor-like\".";

const RESPONSE_SHAPE: &str = r#"Output strictly in JSON format:
{
  "analysis": "Short reasoning summary",
  "recommended_action": "Clear next step",
  "draft_content": "Actionable message or null"
}
"#;

pub(crate) fn render(input: &AnalysisInput, config: &PromptConfig) -> Result<RenderedPrompt, PromptError> {
    let skills = &input.skills;
    let mut prompt = String::new();

    prompt.push_str("# CONTEXT (C)\n");
    prompt.push_str(&format!(
        "Industry: {}\n",
        literal_or(Some(input.context.industry.as_str()), &config.default_industry)
    ));
    prompt.push_str(&format!(
        "Simulation Parameters: {}\n\n",
        compact_json(&skills.simulation_parameters())
    ));
    prompt.push_str(&data_block(
        "Recent Data",
        &Value::Object(input.context.data.clone()),
    )?);

    prompt.push_str("\n# OBJECTIVE (O)\n");
    prompt.push_str(&format!("{}\n\n", literal(&input.objective)));
    prompt.push_str(&format!(
        "Diagnosis Logic: {}\n",
        compact_json(&skills.diagnosis_logic())
    ));
    prompt.push_str(&format!(
        "Health Rules: {}\n",
        compact_json(&skills.health_check_rules())
    ));

    prompt.push_str(&format!("\n# STYLE (S)\n{}\n", STYLE));
    prompt.push_str(&format!("\n# TONE (T)\n{}\n", TONE));

    prompt.push_str("\n# AUDIENCE (A)\n");
    prompt.push_str(&format!("{}\n", literal(&input.audience)));
    prompt.push_str(&format!("\n{}\n", QUOTED_VALUES_NOTICE));

    prompt.push_str("\n# RESPONSE (R)\n");
    prompt.push_str(RESPONSE_SHAPE);
    prompt.push_str(&json_only_instruction(ANALYSIS_KEYS));

    Ok(RenderedPrompt {
        document: PromptDocument::new(prompt),
        schema: ResponseSchema::analysis(),
    })
}
