//! Run command implementation.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::{load_image, parse_request, read_source};
use crate::output::Formatter;
use nexh_domain::Attachment;
use nexh_llm::OllamaProvider;
use nexh_prompt::{Pipeline, TemplateKind};
use std::time::Duration;
use tracing::info;

/// Execute the run command.
pub async fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let contents = read_source(&args.file)?;
    let template = parse_request(&contents, &args.file)?;
    let attachments = attachments_for(&template, args.image.as_deref(), args.mime_type.as_deref())?;

    let pipeline = build_pipeline(config, args.endpoint, args.model)?;
    let result = pipeline.run(&template, attachments).await?;

    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Build a pipeline over the configured Ollama provider.
pub fn build_pipeline(
    config: &Config,
    endpoint: Option<String>,
    model: Option<String>,
) -> Result<Pipeline<OllamaProvider>> {
    let endpoint = endpoint.unwrap_or_else(|| config.provider.endpoint.clone());
    let model = model.unwrap_or_else(|| config.provider.model.clone());
    info!(%endpoint, %model, "Using Ollama provider");

    let provider = OllamaProvider::new(endpoint, model)
        .with_max_retries(config.provider.max_retries)
        .with_timeout(Duration::from_secs(config.provider.timeout_secs));
    Ok(Pipeline::new(provider, config.prompt.clone())?)
}

/// Image extraction needs exactly one image; other templates take none.
fn attachments_for(
    template: &TemplateKind,
    image: Option<&str>,
    mime_type: Option<&str>,
) -> Result<Vec<Attachment>> {
    match (template, image) {
        (TemplateKind::ImageExtraction(_), Some(path)) => Ok(vec![load_image(path, mime_type)?]),
        (TemplateKind::ImageExtraction(_), None) => Err(CliError::InvalidInput(
            "image extraction requires --image".to_string(),
        )),
        (_, Some(_)) => Err(CliError::InvalidInput(format!(
            "the {} template does not take an image",
            template.name()
        ))),
        (_, None) => Ok(Vec::new()),
    }
}
