//! Embedded image data.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;

use crate::error::{Error, Result};

/// MIME type used when the part extension is not recognized.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Bytes of an image part pulled out of the package.
///
/// The data is reference counted so cloning a deck does not copy media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Part path the bytes were read from (e.g. `ppt/media/image1.png`)
    pub name: Option<String>,
    /// MIME type
    pub mime_type: String,
    /// Binary data
    pub data: Arc<[u8]>,
}

impl ImageAsset {
    /// Create an asset for bytes read from the named part.
    pub fn from_part(name: impl Into<String>, data: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = mime_from_filename(&name)
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        Self {
            name: Some(name),
            mime_type,
            data: data.into(),
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// File extension of the source part, if it has a plausible one.
    pub fn extension(&self) -> Option<&str> {
        self.name.as_deref().and_then(|f| {
            f.rsplit_once('.')
                .map(|(_, ext)| ext)
                .filter(|ext| ext.len() <= 5 && ext.chars().all(|c| c.is_alphanumeric()))
        })
    }

    /// Generate a file name for writing this image out.
    pub fn suggested_filename(&self, id: &str) -> String {
        match self.name.as_deref().and_then(|n| n.rsplit('/').next()) {
            Some(file) if !file.is_empty() => file.to_string(),
            _ => {
                let ext = extension_from_mime(&self.mime_type).unwrap_or("bin");
                format!("{}.{}", id, ext)
            }
        }
    }

    /// Encode as a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.data))
    }

    /// Decode a base64 `data:` URL.
    pub fn from_data_url(url: &str, name: Option<String>) -> Result<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| Error::Snapshot("image source is not a data URL".to_string()))?;
        let (mime_type, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| Error::Snapshot("image data URL is not base64".to_string()))?;
        let data = STANDARD
            .decode(payload)
            .map_err(|e| Error::Snapshot(format!("invalid base64 image data: {}", e)))?;
        let mime_type = if mime_type.is_empty() {
            DEFAULT_MIME_TYPE
        } else {
            mime_type
        };

        Ok(Self {
            name,
            mime_type: mime_type.to_string(),
            data: data.into(),
        })
    }
}

/// Determine MIME type from a file name.
pub fn mime_from_filename(filename: &str) -> Option<&'static str> {
    let ext = filename.rsplit_once('.')?.1.to_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "wmf" => "image/x-wmf",
        "emf" => "image/x-emf",
        _ => return None,
    };
    Some(mime)
}

fn extension_from_mime(mime: &str) -> Option<&'static str> {
    match mime {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/bmp" => Some("bmp"),
        "image/tiff" => Some("tiff"),
        "image/svg+xml" => Some("svg"),
        "image/webp" => Some("webp"),
        "image/x-wmf" => Some("wmf"),
        "image/x-emf" => Some("emf"),
        _ => None,
    }
}
