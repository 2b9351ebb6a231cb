//! Layout primitives and the context they render with
//!
//! Every primitive takes the surface, the [`RenderContext`] and a top-left
//! position, paints inside its own style scope and returns the cursor
//! position below what it painted.

mod cursor;
mod primitives;
mod theme;

pub use cursor::Cursor;
pub use primitives::{
    card, checkbox, field, media_row, paragraph, table_row, ParagraphStyle, RowValue,
    CARD_RADIUS, CARD_TITLE_OFFSET, CHECKBOX_SIZE, FIELD_HEIGHT,
};
pub use theme::Theme;

use crate::assets::ImageFetcher;
use crate::geometry::mm;
use crate::graphics::Image;
use crate::surface::DrawingSurface;
use crate::text::Font;
use std::sync::Arc;

/// Fixed page frame: size, margins and the two-column grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub gutter: f64,
}

impl Default for PageGeometry {
    /// A4 portrait with 20 mm margins and an 8 mm gutter
    fn default() -> Self {
        Self {
            width: mm(210.0),
            height: mm(297.0),
            margin: mm(20.0),
            gutter: mm(8.0),
        }
    }
}

impl PageGeometry {
    /// Top edge of the first row of cards
    pub fn content_top(&self) -> f64 {
        self.height - mm(66.0)
    }

    /// Width between the margins
    pub fn full_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Width of one of the two columns
    pub fn column_width(&self) -> f64 {
        (self.full_width() - self.gutter) / 2.0
    }

    pub fn left_x(&self) -> f64 {
        self.margin
    }

    pub fn right_x(&self) -> f64 {
        self.margin + self.column_width() + self.gutter
    }
}

/// Everything primitives and composers read besides the content:
/// font, palette, page frame, image source and logo.
pub struct RenderContext<'a> {
    pub font: Font,
    pub theme: Theme,
    pub geometry: PageGeometry,
    pub fetcher: &'a dyn ImageFetcher,
    pub logo: Option<Arc<Image>>,
}

impl<'a> RenderContext<'a> {
    pub fn new(font: Font, fetcher: &'a dyn ImageFetcher) -> Self {
        Self {
            font,
            theme: Theme::default(),
            geometry: PageGeometry::default(),
            fetcher,
            logo: None,
        }
    }

    pub fn with_logo(mut self, logo: Option<Arc<Image>>) -> Self {
        self.logo = logo;
        self
    }

    /// Blank page surface in this context's font
    pub fn new_surface(&self) -> DrawingSurface {
        DrawingSurface::with_page(
            crate::page::Page::new(self.geometry.width, self.geometry.height),
            self.font.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::OfflineFetcher;

    #[test]
    fn test_a4_grid() {
        let geometry = PageGeometry::default();
        assert!((geometry.width - 595.2756).abs() < 1e-3);
        assert!((geometry.height - 841.8898).abs() < 1e-3);
        assert!((geometry.full_width() - (geometry.width - 2.0 * mm(20.0))).abs() < 1e-9);
        assert!(
            (geometry.right_x() + geometry.column_width() - (geometry.width - geometry.margin)).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_new_surface_uses_context_font() {
        let ctx = RenderContext::new(Font::Helvetica, &OfflineFetcher);
        let surface = ctx.new_surface();
        assert_eq!(surface.font(), &Font::Helvetica);
        assert_eq!(surface.width(), ctx.geometry.width);
        assert!(ctx.logo.is_none());
    }
}
