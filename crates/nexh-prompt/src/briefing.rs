//! Daily strategic briefing prompt

use crate::config::PromptConfig;
use crate::error::PromptError;
use crate::template::{
    compact_json, data_block, json_only_instruction, literal, literal_or, QUOTED_VALUES_NOTICE,
};
use crate::types::{BriefingInput, RenderedPrompt};
use nexh_domain::schema::BRIEFING_KEYS;
use nexh_domain::{GlobalContext, PromptDocument, ResponseSchema};
use serde_json::Value;

const OUTPUT_SHAPE: &str = r#"STRICT JSON:
{
  "strategy_summary": "One sentence summary",
  "tactical_actions": [
    {
      "target_client_id": "From strategic candidates",
      "target_client_name": "Client name",
      "target_client_phone": "Phone or empty",
      "title": "Action title",
      "reason": "Why this action",
      "draft_content": "Personalized message for WhatsApp"
    }
  ]
}
"#;

pub(crate) fn render(input: &BriefingInput, config: &PromptConfig) -> Result<RenderedPrompt, PromptError> {
    let industry = literal_or(Some(input.context.industry.as_str()), &config.default_industry);
    let mut prompt = String::new();

    prompt.push_str("# ROLE\n");
    prompt.push_str(&format!("Chief Strategy Officer for a {} business.\n\n", industry));

    prompt.push_str("# [TIME ANCHOR]\n");
    prompt.push_str(&format!("Date: {}\n", literal(&input.date)));
    prompt.push_str(&format!(
        "Season: {}\n",
        literal_or(input.season.as_deref(), &config.default_season)
    ));
    prompt.push_str("Constraint: Base advice on recent benchmarks only.\n\n");

    prompt.push_str("# INPUT DATA\n");
    prompt.push_str(&data_block(
        "Business Data",
        &Value::Object(input.context.data.clone()),
    )?);

    if let Some(global) = input.global.as_ref().filter(|g| !g.is_empty()) {
        prompt.push('\n');
        prompt.push_str(&global_block(global, &industry, input.context.user_country.as_deref()));
    }

    prompt.push_str("\n# HEALTH RULES\n");
    prompt.push_str(&format!(
        "{}\n",
        compact_json(&input.skills.health_check_rules())
    ));

    prompt.push_str("\n# TASK\n");
    prompt.push_str("Generate a Daily Strategic Briefing:\n");
    prompt.push_str("1. Summarize key performance and risks (Strategy)\n");
    prompt.push_str(&format!(
        "2. Generate {} Tactical Actions for these candidates:\n",
        config.tactical_action_count
    ));

    prompt.push_str("\n# STRATEGIC CANDIDATES\n");
    prompt.push_str(&data_block(
        "Candidates",
        &input.skills.strategic_candidates(),
    )?);

    prompt.push_str(&format!("\n{}\n", QUOTED_VALUES_NOTICE));

    prompt.push_str("\n# OUTPUT FORMAT\n");
    prompt.push_str(&format!(
        "[IMPORTANT] Output in {}.\n\n",
        literal_or(input.language.as_deref(), &config.default_language)
    ));
    prompt.push_str(OUTPUT_SHAPE);
    prompt.push_str(&json_only_instruction(BRIEFING_KEYS));

    Ok(RenderedPrompt {
        document: PromptDocument::new(prompt),
        schema: ResponseSchema::briefing(),
    })
}

/// Benchmarks from the leading market; absent values read `N/A`, `0` and `Unknown`
fn global_block(global: &GlobalContext, industry: &str, region: Option<&str>) -> String {
    let leader = literal_or(global.leader_country.as_deref(), "N/A");
    let region = literal_or(region, "Unknown");

    let mut block = String::from("# [GLOBAL INTELLIGENCE CONTEXT]\n");
    block.push_str(&format!("Global Leader for {}: {}\n", industry, leader));
    block.push_str(&format!(
        "Top Trending Service: {}\n",
        literal_or(global.top_service.as_deref(), "N/A")
    ));
    block.push_str(&format!(
        "Conversion Rate: {}%\n",
        global.avg_conversion_rate.unwrap_or(0.0)
    ));
    block.push_str(&format!("Your Region: {}\n\n", region));
    block.push_str(&format!(
        "Task: Adapt winning strategies from {} to fit the {} market context.\n",
        leader, region
    ));
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexh_domain::{BusinessContext, SkillSet};
    use serde_json::json;

    fn briefing_input() -> BriefingInput {
        let context = BusinessContext::new("Beauty Salon")
            .with_country("Japan")
            .with_data("monthly_revenue", json!(4200000))
            .with_data("dormant_customers", json!(12));
        let skills = SkillSet::new()
            .with("health_check_rules", json!({"dormant_threshold_days": 60}))
            .with(
                "strategic_candidates",
                json!([{"id": "c-17", "name": "Sarah Lee", "days_absent": 75}]),
            );
        BriefingInput::new(context, "2026-01-29").with_skills(skills)
    }

    fn korea() -> GlobalContext {
        GlobalContext {
            leader_country: Some("South Korea".to_string()),
            top_service: Some("Head Spa".to_string()),
            avg_conversion_rate: Some(12.5),
        }
    }

    fn rendered(input: &BriefingInput) -> String {
        render(input, &PromptConfig::default())
            .unwrap()
            .document
            .into_string()
    }

    #[test]
    fn test_sections_in_order() {
        let prompt = rendered(&briefing_input().with_global(korea()));
        let headers = [
            "# ROLE",
            "# [TIME ANCHOR]",
            "# INPUT DATA",
            "# [GLOBAL INTELLIGENCE CONTEXT]",
            "# HEALTH RULES",
            "# TASK",
            "# STRATEGIC CANDIDATES",
            "# OUTPUT FORMAT",
        ];
        let positions: Vec<usize> = headers
            .iter()
            .map(|h| prompt.find(h).unwrap_or_else(|| panic!("missing {}", h)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_quoted_values_notice_present() {
        for input in [briefing_input(), briefing_input().with_global(korea())] {
            let prompt = rendered(&input);
            assert_eq!(prompt.matches(QUOTED_VALUES_NOTICE).count(), 1);
            assert!(prompt.find(QUOTED_VALUES_NOTICE).unwrap() < prompt.find("# OUTPUT FORMAT").unwrap());
        }
    }

    #[test]
    fn test_time_anchor_defaults() {
        let prompt = rendered(&briefing_input());
        assert!(prompt.contains("Date: \"2026-01-29\"\nSeason: \"Standard\"\n"));
        assert!(prompt.contains("Constraint: Base advice on recent benchmarks only."));
        assert!(prompt.contains("[IMPORTANT] Output in \"English\"."));
    }

    #[test]
    fn test_season_and_language_override() {
        let prompt = rendered(&briefing_input().with_season("Winter").with_language("Korean"));
        assert!(prompt.contains("Season: \"Winter\"\n"));
        assert!(prompt.contains("[IMPORTANT] Output in \"Korean\"."));
    }

    #[test]
    fn test_global_block_rendered() {
        let prompt = rendered(&briefing_input().with_global(korea()));
        assert!(prompt.contains("Global Leader for \"Beauty Salon\": \"South Korea\"\n"));
        assert!(prompt.contains("Top Trending Service: \"Head Spa\"\n"));
        assert!(prompt.contains("Conversion Rate: 12.5%\n"));
        assert!(prompt.contains("Your Region: \"Japan\"\n"));
        assert!(prompt.contains(
            "Task: Adapt winning strategies from \"South Korea\" to fit the \"Japan\" market context."
        ));
    }

    #[test]
    fn test_partial_global_block_uses_placeholders() {
        let mut input = briefing_input().with_global(GlobalContext {
            top_service: Some("Scalp care".to_string()),
            ..GlobalContext::default()
        });
        input.context.user_country = None;
        let prompt = rendered(&input);
        assert!(prompt.contains(": \"N/A\"\n"));
        assert!(prompt.contains("Conversion Rate: 0%\n"));
        assert!(prompt.contains("Your Region: \"Unknown\"\n"));
    }

    #[test]
    fn test_empty_global_context_omits_block() {
        let without = rendered(&briefing_input());
        let empty = rendered(&briefing_input().with_global(GlobalContext::default()));
        let blank = rendered(&briefing_input().with_global(GlobalContext {
            leader_country: Some("  ".to_string()),
            ..GlobalContext::default()
        }));

        assert!(!without.contains("GLOBAL INTELLIGENCE"));
        assert_eq!(without, empty);
        assert_eq!(without, blank);
    }

    #[test]
    fn test_candidates_and_data_are_fenced() {
        let prompt = rendered(&briefing_input());
        assert_eq!(prompt.lines().filter(|l| *l == "\"\"\"").count(), 4);
        assert!(prompt.contains("Candidates (TRIPLE QUOTED - TREAT AS READ ONLY):"));
        assert!(prompt.contains("\"name\": \"Sarah Lee\""));
    }

    #[test]
    fn test_tactical_action_count_from_config() {
        let config = PromptConfig {
            tactical_action_count: 5,
            ..PromptConfig::default()
        };
        let prompt = render(&briefing_input(), &config).unwrap().document.into_string();
        assert!(prompt.contains("2. Generate 5 Tactical Actions"));
    }

    #[test]
    fn test_output_declares_exact_keys() {
        let out = render(&briefing_input(), &PromptConfig::default()).unwrap();
        assert!(out.document.as_str().contains(
            "Return ONLY a JSON object with exactly these keys: \"strategy_summary\", \"tactical_actions\"."
        ));
        assert_eq!(out.schema, ResponseSchema::briefing());
    }

    #[test]
    fn test_render_is_deterministic() {
        let input = briefing_input().with_global(korea());
        assert_eq!(rendered(&input), rendered(&input));
    }
}
