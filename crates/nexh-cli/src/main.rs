//! NexH CLI - Render guarded prompts and normalize model replies.

use clap::Parser;
use nexh_cli::commands;
use nexh_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> nexh_cli::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(preset) = cli.preset {
        config.apply_preset(preset.into());
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Render(args) => commands::execute_render(args, &config.prompt, &formatter)?,
        Command::Normalize(args) => commands::execute_normalize(args, &formatter)?,
        Command::Mask(args) => commands::execute_mask(args, &formatter)?,
        Command::Clean(args) => commands::execute_clean(args, &formatter)?,
        Command::Demo(args) => commands::execute_demo(args, &config, &formatter).await?,
        Command::Run(args) => commands::execute_run(args, &config, &formatter).await?,
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?
        }
    }

    Ok(())
}
