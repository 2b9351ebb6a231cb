//! Font file loading

use crate::error::PdfError;
use crate::Result;
use std::path::Path;

/// Font format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    /// TrueType outlines (`glyf`), embeddable as `FontFile2`
    TrueType,
    /// OpenType with CFF outlines
    OpenType,
}

impl FontFormat {
    /// Detect font format from raw data
    pub fn detect(data: &[u8]) -> Result<Self> {
        if data.len() < 4 {
            return Err(PdfError::FontError("Font data too small".into()));
        }

        match &data[0..4] {
            // TTF magic: 0x00010000
            [0x00, 0x01, 0x00, 0x00] => Ok(FontFormat::TrueType),
            // OTF magic: "OTTO"
            [0x4F, 0x54, 0x54, 0x4F] => Ok(FontFormat::OpenType),
            // Apple 'true' tag
            [0x74, 0x72, 0x75, 0x65] => Ok(FontFormat::TrueType),
            _ => Err(PdfError::FontError("Unknown font format".into())),
        }
    }
}

/// Read a font file and check that it can be embedded as a simple
/// TrueType font.
pub fn load_truetype_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    match FontFormat::detect(&bytes)? {
        FontFormat::TrueType => Ok(bytes),
        FontFormat::OpenType => Err(PdfError::FontError(
            "CFF-based OpenType fonts cannot be embedded as TrueType".into(),
        )),
    }
}
