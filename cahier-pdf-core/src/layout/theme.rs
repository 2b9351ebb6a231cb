use crate::forms::{BorderStyle, WidgetAppearance};
use crate::graphics::Color;

/// Palette of the dark brief
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Page background
    pub background: Color,
    /// Card fill
    pub card: Color,
    /// Primary text
    pub text: Color,
    /// Captions, hints and secondary text
    pub muted: Color,
    /// Rules, prices and widget borders
    pub accent: Color,
    /// Card borders and separator rules
    pub line: Color,
    /// Input backgrounds and image placeholders
    pub field_background: Color,
    /// Header band, left half
    pub header_band: Color,
    /// Header band, right half
    pub header_band_right: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x0B, 0x0B, 0x0B),
            card: Color::from_rgb8(0x1B, 0x18, 0x14),
            text: Color::from_rgb8(0xF7, 0xF1, 0xE6),
            muted: Color::from_rgb8(0xC7, 0xBB, 0xA4),
            accent: Color::from_rgb8(0xD6, 0xB3, 0x6A),
            line: Color::from_rgb8(0x3A, 0x2F, 0x1F),
            field_background: Color::from_rgb8(0x14, 0x11, 0x0D),
            header_band: Color::from_rgb8(0x0E, 0x0C, 0x0A),
            header_band_right: Color::from_rgb8(0x15, 0x11, 0x0D),
        }
    }
}

impl Theme {
    /// Text input widgets
    pub fn text_field_appearance(&self) -> WidgetAppearance {
        WidgetAppearance {
            border_color: self.accent,
            background_color: self.field_background,
            text_color: self.text,
            border_width: 0.9,
            border_style: BorderStyle::Solid,
        }
    }

    /// Checkbox widgets; the check mark uses the accent color
    pub fn checkbox_appearance(&self) -> WidgetAppearance {
        WidgetAppearance {
            border_color: self.accent,
            background_color: self.field_background,
            text_color: self.accent,
            border_width: 1.0,
            border_style: BorderStyle::Solid,
        }
    }
}
