//! Embedding image files as `data:` URLs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use keeper::error::{KeeperError, Result};
use std::fs;
use std::path::Path;

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime)
}

/// Reads an image file and encodes it as a self-contained data URL.
pub fn to_data_url(path: &Path) -> Result<String> {
    let mime = mime_for(path).ok_or_else(|| {
        KeeperError::Api(format!("Unsupported image type: {}", path.display()))
    })?;
    let bytes = fs::read(path).map_err(KeeperError::Io)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// Mime type and decoded size of a base64 data URL, for display.
pub fn describe_data_url(url: &str) -> Option<(&str, usize)> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let mime = meta.strip_suffix(";base64")?;
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    let size = ((payload.len() / 4) * 3).saturating_sub(padding.min(2));
    Some((mime, size))
}
