//! Font-wide vertical metrics

/// Font metrics information
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    /// Units per em (typically 1000 or 2048)
    pub units_per_em: u16,
    /// Ascent value in font units
    pub ascent: i16,
    /// Descent value in font units (typically negative)
    pub descent: i16,
    /// Line gap in font units
    pub line_gap: i16,
    /// Cap height in font units
    pub cap_height: i16,
    /// X-height in font units
    pub x_height: i16,
}

impl FontMetrics {
    /// Convert font units to user space units at given font size
    pub fn to_user_space(&self, value: i32, font_size: f64) -> f64 {
        value as f64 * font_size / self.units_per_em as f64
    }

    /// Convert font units to PDF glyph space (1000 units per em)
    pub fn to_glyph_space(&self, value: i16) -> f64 {
        value as f64 * 1000.0 / self.units_per_em as f64
    }

    /// Get line height for given font size
    pub fn line_height(&self, font_size: f64) -> f64 {
        let total_height = self.ascent as i32 - self.descent as i32 + self.line_gap as i32;
        self.to_user_space(total_height, font_size)
    }
}
