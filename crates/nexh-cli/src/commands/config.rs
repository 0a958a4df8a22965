//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use nexh_prompt::PromptConfig;
use std::fs;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: Option<&str>,
    formatter: &Formatter,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(prompt_path) = args.prompt.as_deref() {
        config.prompt = load_prompt_settings(prompt_path)?;
    }

    if args.save {
        let path = Config::resolve_path(path)?;
        config.save_to(&path)?;
        println!(
            "{}",
            formatter.success(&format!("Saved configuration to {}", path.display()))
        );
    } else {
        print!("{}", config.prompt.to_toml().map_err(CliError::Config)?);
    }
    Ok(())
}

/// Read and validate standalone prompt settings.
pub fn load_prompt_settings(path: &str) -> Result<PromptConfig> {
    let contents = fs::read_to_string(path)?;
    let prompt = PromptConfig::from_toml(&contents).map_err(CliError::Config)?;
    prompt.validate().map_err(CliError::Config)?;
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputFormat, TimeoutPreset};
    use tempfile::TempDir;

    fn quiet() -> Formatter {
        Formatter::new(OutputFormat::Quiet, false)
    }

    #[test]
    fn test_printed_settings_load_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.toml");
        let mut config = Config::default();
        config.apply_preset(TimeoutPreset::Fast);
        config.prompt.default_season = "Winter".to_string();
        fs::write(&path, config.prompt.to_toml().unwrap()).unwrap();

        let loaded = load_prompt_settings(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded, config.prompt);
    }

    #[test]
    fn test_invalid_prompt_settings_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.toml");
        fs::write(&path, "tactical_action_count = 0\n").unwrap();

        assert!(matches!(
            load_prompt_settings(path.to_str().unwrap()),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_save_writes_effective_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        let prompt_path = dir.path().join("prompt.toml");
        fs::write(&prompt_path, "default_language = \"Korean\"\n").unwrap();

        let mut config = Config::default();
        config.apply_preset(TimeoutPreset::Patient);
        let args = ConfigArgs {
            save: true,
            prompt: Some(prompt_path.to_str().unwrap().to_string()),
        };
        execute_config(args, &config, config_path.to_str(), &quiet()).unwrap();

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.prompt.default_language, "Korean");
        assert_eq!(loaded.prompt.submit_timeout_secs, 120);
    }
}
