//! Paint operations against one page with scoped style changes
//!
//! The surface tracks the style the content stream is currently in, so a
//! color is only written when it changes. [`DrawingSurface::scope`] brackets
//! a block with `q`/`Q` and puts the tracked style back when the guard is
//! dropped, which also happens when a `?` leaves the block early.

use crate::forms::{Widget, WidgetAppearance};
use crate::geometry::Rectangle;
use crate::graphics::{Color, Image};
use crate::page::Page;
use crate::text::Font;
use crate::writer::BODY_FONT_RESOURCE;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Paint state carried between operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub line_width: f64,
    pub font_size: f64,
}

impl Default for Style {
    /// Initial graphics state of a PDF page
    fn default() -> Self {
        Self {
            fill_color: Color::black(),
            stroke_color: Color::black(),
            line_width: 1.0,
            font_size: 12.0,
        }
    }
}

/// A titled panel painted on the page
#[derive(Debug, Clone, PartialEq)]
pub struct CardSpec {
    pub title: String,
    pub x: f64,
    pub y_top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardSpec {
    pub fn bounds(&self) -> Rectangle {
        Rectangle::from_top_left(self.x, self.y_top, self.width, self.height)
    }
}

/// A labeled input painted on the page, static or interactive
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Form field name; `None` for a static rule or box
    pub field_name: Option<String>,
}

impl FieldSpec {
    pub fn interactive(&self) -> bool {
        self.field_name.is_some()
    }
}

pub struct DrawingSurface {
    page: Page,
    font: Font,
    style: Style,
    cards: Vec<CardSpec>,
    fields: Vec<FieldSpec>,
}

impl DrawingSurface {
    /// Surface over a fresh A4 page, setting text in `font`
    pub fn new(font: Font) -> Self {
        Self::with_page(Page::a4(), font)
    }

    pub fn with_page(page: Page, font: Font) -> Self {
        Self {
            page,
            font,
            style: Style::default(),
            cards: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.page.width()
    }

    pub fn height(&self) -> f64 {
        self.page.height()
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Enter a style scope. Style changes made through the guard are undone
    /// when it is dropped.
    pub fn scope(&mut self) -> StyleScope<'_> {
        self.page.graphics().save_state();
        StyleScope {
            saved: self.style,
            surface: self,
        }
    }

    /// Run `f` inside a style scope
    pub fn scoped<T>(&mut self, f: impl FnOnce(&mut DrawingSurface) -> T) -> T {
        let mut scope = self.scope();
        f(&mut *scope)
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        if self.style.fill_color != color {
            self.style.fill_color = color;
            self.page.graphics().set_fill_color(color);
        }
        self
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        if self.style.stroke_color != color {
            self.style.stroke_color = color;
            self.page.graphics().set_stroke_color(color);
        }
        self
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        if self.style.line_width != width {
            self.style.line_width = width;
            self.page.graphics().set_line_width(width);
        }
        self
    }

    pub fn set_font_size(&mut self, size: f64) -> &mut Self {
        self.style.font_size = size;
        self
    }

    /// Font size and text color in one call
    pub fn set_font(&mut self, size: f64, color: Color) -> &mut Self {
        self.set_font_size(size).set_fill_color(color)
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.page.graphics().rect(x, y, width, height).fill();
        self
    }

    pub fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.page.graphics().rect(x, y, width, height).stroke();
        self
    }

    /// Filled and stroked rectangle
    pub fn fill_stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.page.graphics().rect(x, y, width, height).fill_stroke();
        self
    }

    pub fn fill_round_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64) -> &mut Self {
        self.page
            .graphics()
            .round_rect(x, y, width, height, radius)
            .fill();
        self
    }

    pub fn stroke_round_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64) -> &mut Self {
        self.page
            .graphics()
            .round_rect(x, y, width, height, radius)
            .stroke();
        self
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.page.graphics().move_to(x1, y1).line_to(x2, y2).stroke();
        self
    }

    /// Width of `text` at the current font size
    pub fn text_width(&self, text: &str) -> f64 {
        self.font.measure(text, self.style.font_size)
    }

    /// Text run with its baseline starting at `(x, y)`
    pub fn text(&mut self, x: f64, y: f64, text: &str) -> &mut Self {
        let encoded = self.font.encode(text);
        let size = self.style.font_size;
        self.page
            .graphics()
            .show_text(BODY_FONT_RESOURCE, size, x, y, &encoded);
        self
    }

    /// Text run ending at `x_right`
    pub fn text_right(&mut self, x_right: f64, y: f64, text: &str) -> &mut Self {
        let width = self.text_width(text);
        self.text(x_right - width, y, text)
    }

    /// Paint `image` into the given box
    pub fn image(&mut self, image: Arc<Image>, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.page.draw_image(image, x, y, width, height);
        self
    }

    /// Place a text field widget
    pub fn text_field(
        &mut self,
        name: &str,
        rect: Rectangle,
        font_size: f64,
        appearance: WidgetAppearance,
    ) -> &mut Self {
        self.page
            .add_widget(Widget::text(name, rect, font_size).with_appearance(appearance));
        self
    }

    /// Place a checkbox widget
    pub fn checkbox(&mut self, name: &str, rect: Rectangle, appearance: WidgetAppearance) -> &mut Self {
        self.page
            .add_widget(Widget::checkbox(name, rect).with_appearance(appearance));
        self
    }

    pub fn record_card(&mut self, card: CardSpec) {
        self.cards.push(card);
    }

    pub fn record_field(&mut self, field: FieldSpec) {
        self.fields.push(field);
    }

    /// Cards painted so far, in paint order
    pub fn cards(&self) -> &[CardSpec] {
        &self.cards
    }

    /// Labeled inputs painted so far, in paint order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Hand the finished page to the document
    pub fn finish(self) -> Page {
        self.page
    }
}

/// Guard returned by [`DrawingSurface::scope`]
pub struct StyleScope<'a> {
    surface: &'a mut DrawingSurface,
    saved: Style,
}

impl Deref for StyleScope<'_> {
    type Target = DrawingSurface;

    fn deref(&self) -> &DrawingSurface {
        self.surface
    }
}

impl DerefMut for StyleScope<'_> {
    fn deref_mut(&mut self) -> &mut DrawingSurface {
        self.surface
    }
}

impl Drop for StyleScope<'_> {
    fn drop(&mut self) {
        self.surface.page.graphics().restore_state();
        self.surface.style = self.saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::image::tests::png_bytes;

    fn ops(surface: &DrawingSurface) -> &str {
        surface.page().graphics_operations()
    }

    #[test]
    fn test_color_written_once() {
        let mut surface = DrawingSurface::new(Font::Helvetica);
        let red = Color::rgb(1.0, 0.0, 0.0);
        surface.set_fill_color(red).fill_rect(0.0, 0.0, 5.0, 5.0);
        surface.set_fill_color(red).fill_rect(5.0, 0.0, 5.0, 5.0);

        assert_eq!(ops(&surface).matches("1.000 0.000 0.000 rg").count(), 1);
        assert_eq!(surface.style().fill_color, red);
    }

    #[test]
    fn test_scope_restores_style() {
        let mut surface = DrawingSurface::new(Font::Helvetica);
        surface.set_font(9.0, Color::gray(0.5));
        let before = surface.style();

        {
            let mut scope = surface.scope();
            scope
                .set_fill_color(Color::white())
                .set_stroke_color(Color::white())
                .set_line_width(3.0)
                .set_font_size(22.0);
            scope.fill_rect(0.0, 0.0, 1.0, 1.0);
        }

        assert_eq!(surface.style(), before);
        assert!(ops(&surface).contains("q\n"));
        assert!(ops(&surface).ends_with("Q\n"));
    }

    #[test]
    fn test_scope_restores_on_early_return() {
        fn failing(surface: &mut DrawingSurface) -> Result<(), String> {
            let mut scope = surface.scope();
            scope.set_fill_color(Color::rgb(0.0, 1.0, 0.0));
            let label: Option<&str> = None;
            let label = label.ok_or("content missing")?;
            scope.text(0.0, 0.0, label);
            Ok(())
        }

        let mut surface = DrawingSurface::new(Font::Helvetica);
        let before = surface.style();
        assert!(failing(&mut surface).is_err());

        assert_eq!(surface.style(), before);
        assert_eq!(ops(&surface).matches("q\n").count(), 1);
        assert_eq!(ops(&surface).matches("Q\n").count(), 1);
    }

    #[test]
    fn test_color_after_scope_is_rewritten() {
        let mut surface = DrawingSurface::new(Font::Helvetica);
        let accent = Color::rgb(1.0, 0.5, 0.0);
        surface.scoped(|s| {
            s.set_fill_color(accent);
        });
        // The scope ended, so the color must be set again
        surface.set_fill_color(accent);
        assert_eq!(ops(&surface).matches("1.000 0.500 0.000 rg").count(), 2);
    }

    #[test]
    fn test_text_right_aligns_end() {
        let mut surface = DrawingSurface::new(Font::Helvetica);
        surface.set_font_size(10.0);
        let width = surface.text_width("Page 1/4");
        surface.text_right(200.0, 50.0, "Page 1/4");

        let expected = format!("{:.2} 50.00 Td", 200.0 - width);
        assert!(ops(&surface).contains(&expected));
        assert!(ops(&surface).contains("/F1 10.00 Tf"));
    }

    #[test]
    fn test_widgets_and_images_reach_page() {
        let mut surface = DrawingSurface::new(Font::Helvetica);
        let rect = Rectangle::from_position_and_size(10.0, 10.0, 50.0, 12.0);
        surface
            .text_field("project_name", rect, 9.0, WidgetAppearance::default())
            .checkbox("audience_b2b", rect, WidgetAppearance::default())
            .image(Arc::new(Image::from_bytes(&png_bytes(2, 2)).unwrap()), 0.0, 0.0, 10.0, 10.0);

        let page = surface.finish();
        assert_eq!(page.widgets().len(), 2);
        assert_eq!(page.images().len(), 1);
    }

    #[test]
    fn test_records_cards() {
        let mut surface = DrawingSurface::new(Font::Helvetica);
        surface.record_card(CardSpec {
            title: "Project".into(),
            x: 10.0,
            y_top: 100.0,
            width: 50.0,
            height: 40.0,
        });
        assert_eq!(
            surface.cards()[0].bounds(),
            Rectangle::from_position_and_size(10.0, 60.0, 50.0, 40.0)
        );
    }
}
