//! Optional assets: the body font, the logo and remote images
//!
//! Nothing here is fatal. Every loader returns a typed [`AssetError`] and
//! the caller picks the visual fallback.

mod fetch;
mod font;

pub use fetch::{HttpImageFetcher, ImageFetcher, OfflineFetcher, DEFAULT_TIMEOUT, MAX_IMAGE_BYTES};
pub use font::{FontOutcome, FontResolver, FALLBACK_FONT_NAME, FONT_NAME};

use crate::graphics::Image;
use crate::PdfError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Why an optional asset could not be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("cannot decode image from {source_name}: {reason}")]
    Decode { source_name: String, reason: String },

    #[error("network access disabled, skipped {url}")]
    Offline { url: String },
}

/// Decode `bytes` into an image, naming `source_name` on failure.
pub(crate) fn decode_image(source_name: &str, bytes: &[u8]) -> Result<Image, AssetError> {
    Image::from_bytes(bytes).map_err(|e| AssetError::Decode {
        source_name: source_name.to_string(),
        reason: match e {
            PdfError::InvalidImage(reason) => reason,
            other => other.to_string(),
        },
    })
}

/// Load the brand logo from a local file.
pub fn load_logo(path: impl AsRef<Path>) -> Result<Arc<Image>, AssetError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|e| AssetError::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    decode_image(&path.display().to_string(), &bytes).map(Arc::new)
}

/// [`load_logo`], logging the reason and returning `None` on failure
pub fn load_logo_or_skip(path: impl AsRef<Path>) -> Option<Arc<Image>> {
    match load_logo(path) {
        Ok(logo) => Some(logo),
        Err(error) => {
            warn!(%error, "logo unavailable, header drawn without it");
            None
        }
    }
}
