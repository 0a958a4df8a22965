//! Mask and clean command implementations.

use crate::cli::TextArgs;
use crate::error::Result;
use crate::input::read_text;
use crate::output::Formatter;
use nexh_guard::{clean_input, mask_pii};

/// Execute the mask command.
pub fn execute_mask(args: TextArgs, formatter: &Formatter) -> Result<()> {
    let text = read_text(args.text)?;
    println!("{}", formatter.format_text(&mask_pii(text.trim_end_matches('\n')))?);
    Ok(())
}

/// Execute the clean command.
pub fn execute_clean(args: TextArgs, formatter: &Formatter) -> Result<()> {
    let text = read_text(args.text)?;
    println!("{}", formatter.format_text(&clean_input(&text))?);
    Ok(())
}
