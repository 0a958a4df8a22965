//! Reading requests, replies and images from files or stdin.

use crate::error::{CliError, Result};
use nexh_domain::Attachment;
use nexh_prompt::TemplateKind;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a file, or stdin when `path` is `-`.
pub fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        read_stdin()
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Use the argument when given, stdin otherwise.
pub fn read_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Parse a request; `.toml` files are TOML, everything else JSON.
pub fn parse_request(contents: &str, path: &str) -> Result<TemplateKind> {
    let is_toml = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        Ok(toml::from_str(contents)?)
    } else {
        Ok(serde_json::from_str(contents)?)
    }
}

/// Read an image into an attachment.
pub fn load_image(path: &str, mime_type: Option<&str>) -> Result<Attachment> {
    let mime_type = match mime_type {
        Some(mime) => mime.to_string(),
        None => guess_mime_type(path)
            .ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Cannot guess the image type of '{}'. Use --mime-type",
                    path
                ))
            })?
            .to_string(),
    };
    let data = fs::read(path)?;
    Ok(Attachment::new(data, mime_type))
}

/// MIME type from a file extension.
pub fn guess_mime_type(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}
