//! Render command implementation.

use crate::cli::RenderArgs;
use crate::error::Result;
use crate::input::{parse_request, read_source};
use crate::output::Formatter;
use nexh_prompt::{PromptConfig, RenderedPrompt};

/// Execute the render command.
pub fn execute_render(args: RenderArgs, config: &PromptConfig, formatter: &Formatter) -> Result<()> {
    let contents = read_source(&args.file)?;
    let rendered = render_request(&contents, &args.file, config)?;
    println!("{}", formatter.format_prompt(&rendered)?);
    Ok(())
}

/// Parse a request and render its prompt.
pub fn render_request(contents: &str, path: &str, config: &PromptConfig) -> Result<RenderedPrompt> {
    let template = parse_request(contents, path)?;
    Ok(template.render(config)?)
}
