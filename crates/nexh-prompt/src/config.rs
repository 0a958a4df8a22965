//! Configuration for prompt rendering and submission

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the [`Pipeline`](crate::Pipeline) and the templates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Maximum time for a single submission (seconds)
    pub submit_timeout_secs: u64,

    /// Industry used when the caller's industry is blank after cleaning
    pub default_industry: String,

    /// Briefing output language when the caller gives none
    pub default_language: String,

    /// Briefing season when the caller gives none
    pub default_season: String,

    /// Number of tactical actions a briefing asks for
    pub tactical_action_count: usize,

    /// Log masked prompt and reply bodies at debug level
    pub log_prompts: bool,
}

impl PromptConfig {
    /// Get the submission timeout as a Duration
    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.submit_timeout_secs == 0 {
            return Err("submit_timeout_secs must be greater than 0".to_string());
        }
        if self.tactical_action_count == 0 {
            return Err("tactical_action_count must be greater than 0".to_string());
        }
        if self.default_industry.trim().is_empty() {
            return Err("default_industry cannot be blank".to_string());
        }
        if self.default_language.trim().is_empty() {
            return Err("default_language cannot be blank".to_string());
        }
        if self.default_season.trim().is_empty() {
            return Err("default_season cannot be blank".to_string());
        }
        Ok(())
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            submit_timeout_secs: 120,
            default_industry: "General".to_string(),
            default_language: "English".to_string(),
            default_season: "Standard".to_string(),
            tactical_action_count: 3,
            log_prompts: false,
        }
    }
}

impl PromptConfig {
    /// Fast preset: short timeout for interactive use
    pub fn fast() -> Self {
        Self {
            submit_timeout_secs: 30,
            ..Self::default()
        }
    }

    /// Patient preset: long timeout for slow or local models
    pub fn patient() -> Self {
        Self {
            submit_timeout_secs: 600,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PromptConfig::default().validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(PromptConfig::fast().validate().is_ok());
        assert!(PromptConfig::patient().validate().is_ok());
        assert!(PromptConfig::fast().submit_timeout() < PromptConfig::patient().submit_timeout());
    }

    #[test]
    fn test_invalid_timeout() {
        let config = PromptConfig {
            submit_timeout_secs: 0,
            ..PromptConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_blank_language() {
        let config = PromptConfig {
            default_language: "  ".to_string(),
            ..PromptConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = PromptConfig::from_toml("default_language = \"Korean\"\n").unwrap();
        assert_eq!(config.default_language, "Korean");
        assert_eq!(config.submit_timeout_secs, 120);
        assert_eq!(config.tactical_action_count, 3);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PromptConfig::patient();
        let toml_str = config.to_toml().unwrap();
        assert_eq!(PromptConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_bad_toml() {
        assert!(PromptConfig::from_toml("submit_timeout_secs = \"soon\"").is_err());
    }
}
