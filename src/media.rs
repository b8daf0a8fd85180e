use std::fs;
use std::path::Path;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::core::errors::Result;

/// Read an image file into a `data:` URL, guessing the MIME type from the
/// extension. The result is what gets stored on posts and profiles.
pub fn file_to_data_url(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("unreadable image file {}", path.display()))?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes)))
}
