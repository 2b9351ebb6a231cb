use crate::objects::Object;

/// Represents a color in PDF documents.
///
/// Supports RGB and Grayscale color spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// RGB color (red, green, blue) with values from 0.0 to 1.0
    Rgb(f64, f64, f64),
    /// Grayscale color with value from 0.0 (black) to 1.0 (white)
    Gray(f64),
}

impl Color {
    /// Creates an RGB color with values clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Creates a grayscale color with value clamped to 0.0-1.0.
    pub fn gray(value: f64) -> Self {
        Color::Gray(value.clamp(0.0, 1.0))
    }

    /// Build a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Black color (gray 0.0).
    pub fn black() -> Self {
        Color::Gray(0.0)
    }

    /// White color (gray 1.0).
    pub fn white() -> Self {
        Color::Gray(1.0)
    }

    /// Color components as a PDF array, e.g. for `/MK /BC`.
    pub fn to_pdf_array(&self) -> Object {
        match *self {
            Color::Rgb(r, g, b) => Object::Array(vec![
                Object::Real(round3(r)),
                Object::Real(round3(g)),
                Object::Real(round3(b)),
            ]),
            Color::Gray(g) => Object::Array(vec![Object::Real(round3(g))]),
        }
    }

    /// Fill operator text, e.g. `0.839 0.702 0.416 rg`.
    pub fn fill_operator(&self) -> String {
        match *self {
            Color::Rgb(r, g, b) => format!("{r:.3} {g:.3} {b:.3} rg"),
            Color::Gray(g) => format!("{g:.3} g"),
        }
    }

    /// Stroke operator text, e.g. `0.839 0.702 0.416 RG`.
    pub fn stroke_operator(&self) -> String {
        match *self {
            Color::Rgb(r, g, b) => format!("{r:.3} {g:.3} {b:.3} RG"),
            Color::Gray(g) => format!("{g:.3} G"),
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
