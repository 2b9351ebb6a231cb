use crate::fonts::TrueTypeFont;
use crate::text::encoding::{encode_win_ansi, win_ansi_char};
use crate::text::metrics::HELVETICA;
use std::sync::Arc;

/// Body font used for every text run on a page.
///
/// Either the standard Helvetica, which viewers always provide, or an
/// embedded TrueType font shared between documents.
#[derive(Debug, Clone)]
pub enum Font {
    /// Helvetica (sans-serif)
    Helvetica,
    /// Embedded TrueType font
    Embedded(Arc<TrueTypeFont>),
}

impl Font {
    /// Logical name of the font
    pub fn name(&self) -> &str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::Embedded(font) => &font.name,
        }
    }

    /// Name written as `BaseFont`
    pub fn base_font(&self) -> &str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::Embedded(font) => font.postscript_name(),
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Font::Embedded(_))
    }

    /// Bytes written to the content stream for `text`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        encode_win_ansi(text)
    }

    /// Width of `text` at `size` in points.
    ///
    /// Both variants measure the characters that are actually rendered,
    /// so a character outside WinAnsi is measured as the `?` that
    /// replaces it.
    pub fn measure(&self, text: &str, size: f64) -> f64 {
        match self {
            Font::Helvetica => {
                let units: u32 = encode_win_ansi(text)
                    .into_iter()
                    .filter_map(win_ansi_char)
                    .map(|ch| HELVETICA.char_width(ch) as u32)
                    .sum();
                units as f64 / 1000.0 * size
            }
            Font::Embedded(font) => font.measure(text, size),
        }
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Font::Helvetica, Font::Helvetica) => true,
            (Font::Embedded(a), Font::Embedded(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
