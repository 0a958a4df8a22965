//! Typed inputs for each template and the rendered output

use nexh_domain::{BusinessContext, FieldSpec, GlobalContext, PromptDocument, ResponseSchema, SkillSet};
use serde::{Deserialize, Serialize};

/// Input of the structured-analysis (CO-STAR) template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Industry, region and untrusted business data
    pub context: BusinessContext,

    /// What the model should achieve; caller free text
    pub objective: String,

    /// Who reads the answer; caller free text
    pub audience: String,

    /// Rule blocks echoed into the prompt
    #[serde(default)]
    pub skills: SkillSet,
}

impl AnalysisInput {
    /// Create an analysis input with no skills
    pub fn new(context: BusinessContext, objective: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            context,
            objective: objective.into(),
            audience: audience.into(),
            skills: SkillSet::new(),
        }
    }

    /// Attach rule blocks
    pub fn with_skills(mut self, skills: SkillSet) -> Self {
        self.skills = skills;
        self
    }
}

/// Input of the image-extraction template
///
/// The image itself is not part of the input: templates render text only and
/// the pipeline attaches the image to the submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionInput {
    /// Industry the document comes from
    #[serde(default)]
    pub industry: String,

    /// Ordered fields to extract
    pub fields: Vec<FieldSpec>,
}

impl ExtractionInput {
    /// Create an extraction input
    pub fn new(industry: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            industry: industry.into(),
            fields,
        }
    }
}

/// Input of the daily-briefing template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefingInput {
    /// Industry, region and untrusted business data
    pub context: BusinessContext,

    /// Date the briefing is for, e.g. `2026-01-29`
    pub date: String,

    /// Rule blocks; `health_check_rules` and `strategic_candidates` are used
    #[serde(default)]
    pub skills: SkillSet,

    /// Benchmarks from the leading market
    #[serde(default, alias = "globalContext", skip_serializing_if = "Option::is_none")]
    pub global: Option<GlobalContext>,

    /// Season, e.g. `Winter`; configuration default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,

    /// Output language; configuration default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl BriefingInput {
    /// Create a briefing input
    pub fn new(context: BusinessContext, date: impl Into<String>) -> Self {
        Self {
            context,
            date: date.into(),
            skills: SkillSet::new(),
            global: None,
            season: None,
            language: None,
        }
    }

    /// Attach rule blocks
    pub fn with_skills(mut self, skills: SkillSet) -> Self {
        self.skills = skills;
        self
    }

    /// Attach global benchmarks
    pub fn with_global(mut self, global: GlobalContext) -> Self {
        self.global = Some(global);
        self
    }

    /// Set the season
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// Set the output language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// A rendered prompt together with the schema its reply must satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPrompt {
    /// Prompt text handed to the model
    pub document: PromptDocument,

    /// Key enumeration declared at the end of the prompt
    pub schema: ResponseSchema,
}
