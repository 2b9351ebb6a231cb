//! TrueType font loading and embedding
//!
//! Fonts are embedded as simple TrueType fonts with `WinAnsiEncoding`, so
//! every character that reaches a content stream is one byte and its width
//! comes from the `Widths` array written next to the font program.

pub mod embedder;
pub mod font_descriptor;
pub mod font_metrics;
pub mod loader;
pub mod ttf_parser;

#[cfg(test)]
pub(crate) mod test_font;

pub use embedder::{standard_font_dict, FontEmbedder, FIRST_CHAR, LAST_CHAR};
pub use font_descriptor::{FontDescriptor, FontFlags};
pub use font_metrics::FontMetrics;
pub use loader::{load_truetype_bytes, FontFormat};
pub use ttf_parser::{GlyphMapping, TtfParser};

use crate::text::encoding::{encode_win_ansi, win_ansi_char};
use crate::Result;
use std::path::Path;

/// A parsed TrueType font ready for measuring and embedding
#[derive(Debug, Clone)]
pub struct TrueTypeFont {
    /// Logical name the font is registered under
    pub name: String,
    /// Raw font program
    pub data: Vec<u8>,
    /// Font metrics
    pub metrics: FontMetrics,
    /// Font descriptor
    pub descriptor: FontDescriptor,
    /// Character to glyph mapping
    pub glyph_mapping: GlyphMapping,
}

impl TrueTypeFont {
    /// Load a font from file path
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let data = load_truetype_bytes(path)?;
        Self::from_bytes(name, data)
    }

    /// Load a font from byte data
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self> {
        let parser = TtfParser::new(&data)?;
        let metrics = parser.extract_metrics()?;
        let descriptor = parser.create_descriptor()?;
        let glyph_mapping = parser.extract_glyph_mapping()?;

        Ok(TrueTypeFont {
            name: name.into(),
            data,
            metrics,
            descriptor,
            glyph_mapping,
        })
    }

    /// Get the PostScript name of the font
    pub fn postscript_name(&self) -> &str {
        &self.descriptor.font_name
    }

    /// Check if the font contains a specific character
    pub fn has_glyph(&self, ch: char) -> bool {
        self.glyph_mapping.char_to_glyph(ch).is_some()
    }

    /// Width of one WinAnsi code in glyph space (1000 units per em).
    /// Codes without a glyph use the `.notdef` advance.
    pub fn code_width(&self, code: u8) -> f64 {
        let units = win_ansi_char(code)
            .and_then(|ch| self.glyph_mapping.char_width(ch))
            .unwrap_or_else(|| self.glyph_mapping.missing_width());
        self.metrics.to_user_space(units as i32, 1000.0)
    }

    /// `Widths` array entries for codes `FIRST_CHAR..=LAST_CHAR`
    pub fn widths(&self) -> Vec<f64> {
        (FIRST_CHAR..=LAST_CHAR).map(|code| self.code_width(code)).collect()
    }

    /// Width of `text` at `font_size`, measured on the bytes that will
    /// actually be written to the content stream.
    pub fn measure(&self, text: &str, font_size: f64) -> f64 {
        let units: f64 = encode_win_ansi(text)
            .into_iter()
            .map(|code| self.code_width(code))
            .sum();
        units * font_size / 1000.0
    }

    /// Get the recommended line height for this font at a specific size
    pub fn line_height(&self, font_size: f64) -> f64 {
        self.metrics.line_height(font_size)
    }
}
