mod color;
pub(crate) mod image;

pub use color::Color;
pub use image::Image;

use crate::text::escape_literal;
use std::fmt::Write;

/// Bezier control distance for a quarter circle of radius 1.
const KAPPA: f64 = 0.552284749831;

/// Content stream builder for one page.
///
/// Shapes and text runs land in a single operation list so paint order is
/// exactly call order. Color operators are written when the color is set,
/// which keeps them outside path construction.
#[derive(Clone, Debug)]
pub struct GraphicsContext {
    operations: String,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
}

impl Default for GraphicsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            fill_color: Color::black(),
            stroke_color: Color::black(),
            line_width: 1.0,
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        writeln!(&mut self.operations, "{x:.2} {y:.2} m").unwrap();
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        writeln!(&mut self.operations, "{x:.2} {y:.2} l").unwrap();
        self
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        writeln!(
            &mut self.operations,
            "{x1:.2} {y1:.2} {x2:.2} {y2:.2} {x3:.2} {y3:.2} c"
        )
        .unwrap();
        self
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        writeln!(
            &mut self.operations,
            "{x:.2} {y:.2} {width:.2} {height:.2} re"
        )
        .unwrap();
        self
    }

    /// Rectangle path with circular corners. The radius is clamped to half
    /// the shorter side.
    pub fn round_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64) -> &mut Self {
        let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
        if r == 0.0 {
            return self.rect(x, y, width, height);
        }
        let k = KAPPA * r;
        let (x1, y1) = (x + width, y + height);

        self.move_to(x + r, y);
        self.line_to(x1 - r, y);
        self.curve_to(x1 - r + k, y, x1, y + r - k, x1, y + r);
        self.line_to(x1, y1 - r);
        self.curve_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
        self.line_to(x + r, y1);
        self.curve_to(x + r - k, y1, x, y1 - r + k, x, y1 - r);
        self.line_to(x, y + r);
        self.curve_to(x, y + r - k, x + r - k, y, x + r, y);
        self.close_path()
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.operations.push_str("h\n");
        self
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.operations.push_str("S\n");
        self
    }

    pub fn fill(&mut self) -> &mut Self {
        self.operations.push_str("f\n");
        self
    }

    pub fn fill_stroke(&mut self) -> &mut Self {
        self.operations.push_str("B\n");
        self
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        self.stroke_color = color;
        writeln!(&mut self.operations, "{}", color.stroke_operator()).unwrap();
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.fill_color = color;
        writeln!(&mut self.operations, "{}", color.fill_operator()).unwrap();
        self
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.line_width = width;
        writeln!(&mut self.operations, "{width:.2} w").unwrap();
        self
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.operations.push_str("q\n");
        self
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.operations.push_str("Q\n");
        self
    }

    /// Show an already encoded string with the given font resource at
    /// `(x, y)`, painted in the current fill color.
    pub fn show_text(
        &mut self,
        font_resource: &str,
        size: f64,
        x: f64,
        y: f64,
        encoded: &[u8],
    ) -> &mut Self {
        self.operations.push_str("BT\n");
        writeln!(&mut self.operations, "/{font_resource} {size:.2} Tf").unwrap();
        writeln!(&mut self.operations, "{x:.2} {y:.2} Td").unwrap();
        writeln!(&mut self.operations, "({}) Tj", escape_literal(encoded)).unwrap();
        self.operations.push_str("ET\n");
        self
    }

    pub fn draw_image(
        &mut self,
        image_name: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> &mut Self {
        self.save_state();

        // Unit square scaled and moved into place
        writeln!(
            &mut self.operations,
            "{width:.2} 0 0 {height:.2} {x:.2} {y:.2} cm"
        )
        .unwrap();
        writeln!(&mut self.operations, "/{image_name} Do").unwrap();

        self.restore_state();
        self
    }

    /// Get the current fill color
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Get the current stroke color
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Get the current line width
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Get the operations string
    pub fn operations(&self) -> &str {
        &self.operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphics_context_new() {
        let ctx = GraphicsContext::new();
        assert_eq!(ctx.fill_color(), Color::black());
        assert_eq!(ctx.stroke_color(), Color::black());
        assert_eq!(ctx.line_width(), 1.0);
        assert!(ctx.operations().is_empty());
    }

    #[test]
    fn test_move_and_line() {
        let mut ctx = GraphicsContext::new();
        ctx.move_to(10.0, 20.0).line_to(30.0, 40.0);
        assert!(ctx.operations().contains("10.00 20.00 m\n"));
        assert!(ctx.operations().contains("30.00 40.00 l\n"));
    }

    #[test]
    fn test_rect() {
        let mut ctx = GraphicsContext::new();
        ctx.rect(10.0, 20.0, 100.0, 50.0);
        assert!(ctx.operations().contains("10.00 20.00 100.00 50.00 re\n"));
    }

    #[test]
    fn test_round_rect_path() {
        let mut ctx = GraphicsContext::new();
        ctx.round_rect(0.0, 0.0, 100.0, 50.0, 8.0);

        let ops = ctx.operations();
        assert!(ops.starts_with("8.00 0.00 m\n"));
        assert_eq!(ops.matches(" c\n").count(), 4);
        assert_eq!(ops.matches(" l\n").count(), 4);
        assert!(ops.ends_with("h\n"));
    }

    #[test]
    fn test_round_rect_zero_radius_is_plain_rect() {
        let mut ctx = GraphicsContext::new();
        ctx.round_rect(1.0, 2.0, 3.0, 4.0, 0.0);
        assert_eq!(ctx.operations(), "1.00 2.00 3.00 4.00 re\n");
    }

    #[test]
    fn test_stroke_applies_color() {
        let mut ctx = GraphicsContext::new();
        ctx.set_stroke_color(Color::rgb(1.0, 0.0, 0.0));
        ctx.rect(0.0, 0.0, 10.0, 10.0);
        ctx.stroke();

        // Color operators must come before path construction
        assert_eq!(
            ctx.operations(),
            "1.000 0.000 0.000 RG\n0.00 0.00 10.00 10.00 re\nS\n"
        );
    }

    #[test]
    fn test_fill_applies_color() {
        let mut ctx = GraphicsContext::new();
        ctx.set_fill_color(Color::rgb(0.0, 0.0, 1.0));
        ctx.rect(0.0, 0.0, 10.0, 10.0);
        ctx.fill();

        let ops = ctx.operations();
        assert!(ops.contains("0.000 0.000 1.000 rg\n"));
        assert!(ops.ends_with("f\n"));
    }

    #[test]
    fn test_show_text_escapes() {
        let mut ctx = GraphicsContext::new();
        ctx.set_fill_color(Color::white());
        ctx.show_text("F1", 9.0, 10.0, 20.0, b"Budget (EUR)");

        let ops = ctx.operations();
        assert!(ops.starts_with("1.000 g\nBT\n/F1 9.00 Tf\n10.00 20.00 Td\n"));
        assert!(ops.contains("(Budget \\(EUR\\)) Tj\n"));
        assert!(ops.ends_with("ET\n"));
    }

    #[test]
    fn test_draw_image() {
        let mut ctx = GraphicsContext::new();
        ctx.draw_image("Im1", 5.0, 6.0, 30.0, 40.0);
        assert_eq!(
            ctx.operations(),
            "q\n30.00 0 0 40.00 5.00 6.00 cm\n/Im1 Do\nQ\n"
        );
    }

    #[test]
    fn test_save_restore_and_line_width() {
        let mut ctx = GraphicsContext::new();
        ctx.save_state().set_line_width(0.7).restore_state();
        assert_eq!(ctx.operations(), "q\n0.70 w\nQ\n");
        assert_eq!(ctx.line_width(), 0.7);
    }
}
