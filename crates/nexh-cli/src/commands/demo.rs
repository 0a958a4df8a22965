//! Demo command implementation.

use crate::cli::DemoArgs;
use crate::commands::run::build_pipeline;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use nexh_domain::{BusinessContext, SkillSet};
use nexh_prompt::{AnalysisInput, TemplateKind};
use serde_json::json;

/// Execute the demo command.
pub async fn execute_demo(args: DemoArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let input = salon_demo();

    if args.submit {
        let pipeline = build_pipeline(config, None, None)?;
        let result = pipeline.analyze(&input).await?;
        println!("{}", formatter.format_result(&result)?);
    } else {
        let rendered = TemplateKind::from(input).render(&config.prompt)?;
        eprintln!("{}", formatter.info("Generated CO-STAR prompt"));
        println!("{}", formatter.format_prompt(&rendered)?);
    }
    Ok(())
}

/// Retention analysis for a customer who has not visited a beauty salon in 75 days.
pub fn salon_demo() -> AnalysisInput {
    let context = BusinessContext::new("Beauty Salon")
        .with_data("customer_name", json!("Sarah Lee"))
        .with_data("last_visit", json!("2025-11-15"))
        .with_data("days_absent", json!(75))
        .with_data("preferred_service", json!("Facial Treatment"));

    let skills = SkillSet::new()
        .with(
            "health_check_rules",
            json!({"dormant_threshold_days": 60, "risk_level": "high"}),
        )
        .with(
            "marketing_action",
            json!({
                "channel": "WhatsApp",
                "template_instruction": "Friendly, offer 10% comeback discount"
            }),
        );

    AnalysisInput::new(
        context,
        "Analyze customer retention risk and recommend re-engagement action",
        "Salon owner who wants to win back dormant customers",
    )
    .with_skills(skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexh_prompt::PromptConfig;

    #[test]
    fn test_salon_demo_renders() {
        let rendered = TemplateKind::from(salon_demo())
            .render(&PromptConfig::default())
            .unwrap();
        let prompt = rendered.document.as_str();
        assert!(prompt.contains("Industry: \"Beauty Salon\""));
        assert!(prompt.contains("\"preferred_service\": \"Facial Treatment\""));
        assert!(prompt.contains(r#"Health Rules: {"dormant_threshold_days":60,"risk_level":"high"}"#));
    }
}
