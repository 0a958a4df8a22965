//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// NexH - Build guarded prompts and validate model replies.
#[derive(Debug, Parser)]
#[command(name = "nexh")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.nexh/config.toml)
    #[arg(short, long, global = true, env = "NEXH_CONFIG")]
    pub config: Option<String>,

    /// Submission timeout preset, overriding `[prompt] submit_timeout_secs`
    #[arg(long, value_enum, global = true)]
    pub preset: Option<CliPreset>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// Timeout preset options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliPreset {
    /// 30 second submissions, for interactive use
    Fast,
    /// 10 minute submissions, for slow local models
    Patient,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a request file into a prompt without submitting it
    Render(RenderArgs),

    /// Normalize a raw model reply against a reply schema
    Normalize(NormalizeArgs),

    /// Mask emails and phone numbers in text
    Mask(TextArgs),

    /// Strip markup from text
    Clean(TextArgs),

    /// Render the Beauty Salon retention analysis demo
    Demo(DemoArgs),

    /// Render, submit to the configured Ollama model, and normalize
    Run(RunArgs),

    /// Show the effective prompt settings, or save the configuration
    Config(ConfigArgs),
}

/// Arguments for the render command.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Request file (JSON or TOML), or `-` for stdin
    pub file: String,
}

/// Arguments for the normalize command.
#[derive(Debug, Parser)]
pub struct NormalizeArgs {
    /// File holding the raw reply; reads stdin when omitted
    pub file: Option<String>,

    /// Reply schema
    #[arg(short, long, value_enum, default_value = "analysis")]
    pub schema: SchemaArg,

    /// Field keys for the `fields` schema, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub keys: Vec<String>,
}

/// Arguments for the mask and clean commands.
#[derive(Debug, Parser)]
pub struct TextArgs {
    /// Text to process; reads stdin when omitted
    pub text: Option<String>,
}

/// Arguments for the demo command.
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Submit the demo prompt to the configured model
    #[arg(long)]
    pub submit: bool,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Request file (JSON or TOML), or `-` for stdin
    pub file: String,

    /// Image to attach (required for image extraction)
    #[arg(short, long)]
    pub image: Option<String>,

    /// MIME type of the image; guessed from the extension when omitted
    #[arg(long)]
    pub mime_type: Option<String>,

    /// Override the configured Ollama endpoint
    #[arg(long, env = "NEXH_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Override the configured model
    #[arg(short, long, env = "NEXH_MODEL")]
    pub model: Option<String>,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Write the effective configuration to the config file
    #[arg(long)]
    pub save: bool,

    /// Replace the prompt settings with a file in the format this command prints
    #[arg(long)]
    pub prompt: Option<String>,
}

/// Reply schema argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaArg {
    /// analysis, recommended_action, draft_content
    Analysis,
    /// strategy_summary, tactical_actions
    Briefing,
    /// The keys given with --keys
    Fields,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<CliPreset> for crate::config::TimeoutPreset {
    fn from(preset: CliPreset) -> Self {
        match preset {
            CliPreset::Fast => crate::config::TimeoutPreset::Fast,
            CliPreset::Patient => crate::config::TimeoutPreset::Patient,
        }
    }
}
