use super::AssetError;
use crate::fonts::TrueTypeFont;
use crate::text::Font;
use crate::PdfError;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Logical name of the embedded body font
pub const FONT_NAME: &str = "NotoSans";

/// Logical name of the font used when the body font cannot be loaded
pub const FALLBACK_FONT_NAME: &str = "Helvetica";

/// Result of resolving the body font
#[derive(Debug, Clone)]
pub enum FontOutcome {
    /// The TrueType file loaded and will be embedded
    Embedded(Arc<TrueTypeFont>),
    /// Helvetica is used instead, for `reason`
    Fallback { reason: AssetError },
}

impl FontOutcome {
    /// Logical font name: [`FONT_NAME`] or [`FALLBACK_FONT_NAME`]
    pub fn logical_name(&self) -> &str {
        match self {
            FontOutcome::Embedded(font) => &font.name,
            FontOutcome::Fallback { .. } => FALLBACK_FONT_NAME,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FontOutcome::Fallback { .. })
    }

    /// The font text runs are set in
    pub fn font(&self) -> Font {
        match self {
            FontOutcome::Embedded(font) => Font::Embedded(Arc::clone(font)),
            FontOutcome::Fallback { .. } => Font::Helvetica,
        }
    }
}

/// Loads the body font once and hands out the shared result
#[derive(Debug, Default)]
pub struct FontResolver;

impl FontResolver {
    pub fn new() -> Self {
        Self
    }

    /// Load the TrueType font at `path` under [`FONT_NAME`].
    pub fn resolve(&self, path: impl AsRef<Path>) -> FontOutcome {
        let path = path.as_ref();
        match load(path) {
            Ok(font) => {
                info!(path = %path.display(), font = font.postscript_name(), "embedding body font");
                FontOutcome::Embedded(Arc::new(font))
            }
            Err(reason) => {
                warn!(%reason, "falling back to {FALLBACK_FONT_NAME}");
                FontOutcome::Fallback { reason }
            }
        }
    }
}

fn load(path: &Path) -> Result<TrueTypeFont, AssetError> {
    if !path.is_file() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }
    TrueTypeFont::from_file(FONT_NAME, path).map_err(|e| AssetError::Unreadable {
        path: path.to_path_buf(),
        reason: match e {
            PdfError::FontError(reason) => reason,
            other => other.to_string(),
        },
    })
}
