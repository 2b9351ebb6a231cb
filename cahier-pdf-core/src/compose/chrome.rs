//! Header band, title block and footer shared by every page

use crate::content::{BriefContent, PageContext};
use crate::geometry::mm;
use crate::layout::RenderContext;
use crate::surface::DrawingSurface;

/// Brand name in the header band
pub const BRAND: &str = "Kah-Digital";

/// Height of the header band
pub fn band_height() -> f64 {
    mm(36.0)
}

/// Page background, header band with logo, brand and page counter, and
/// the accent rule under the band.
pub fn header(
    surface: &mut DrawingSurface,
    ctx: &RenderContext<'_>,
    page: &PageContext,
    content: &BriefContent,
) {
    let g = ctx.geometry;
    let theme = ctx.theme;
    let band_y = g.height - band_height();

    let mut s = surface.scope();
    s.set_fill_color(theme.background)
        .fill_rect(0.0, 0.0, g.width, g.height);
    s.set_fill_color(theme.header_band)
        .fill_rect(0.0, band_y, g.width, band_height());
    s.set_fill_color(theme.header_band_right)
        .fill_rect(g.width / 2.0, band_y, g.width / 2.0, band_height());

    if let Some(logo) = &ctx.logo {
        s.image(logo.clone(), mm(20.0), g.height - mm(30.0), mm(12.0), mm(12.0));
    }

    s.set_font(13.0, theme.text)
        .text(mm(36.0), g.height - mm(16.0), BRAND);
    s.set_font(9.0, theme.muted).text_right(
        g.width - mm(20.0),
        g.height - mm(16.0),
        &page.header_text(content),
    );

    s.set_stroke_color(theme.accent)
        .set_line_width(1.1)
        .line(g.margin, band_y, g.width - g.margin, band_y);
}

/// Page title and subtitle under the header band
pub fn title_block(surface: &mut DrawingSurface, ctx: &RenderContext<'_>, title: &str, subtitle: &str) {
    let g = ctx.geometry;
    let mut s = surface.scope();
    s.set_font(22.0, ctx.theme.text)
        .text(g.margin, g.height - mm(50.0), title);
    s.set_font(11.0, ctx.theme.muted)
        .text(g.margin, g.height - mm(57.0), subtitle);
}

/// Rule near the bottom edge with a note under it
pub fn footer(surface: &mut DrawingSurface, ctx: &RenderContext<'_>, note: &str) {
    let g = ctx.geometry;
    let mut s = surface.scope();
    s.set_stroke_color(ctx.theme.line)
        .set_line_width(0.7)
        .line(g.margin, mm(18.0), g.width - g.margin, mm(18.0));
    s.set_font(8.0, ctx.theme.muted).text(g.margin, mm(12.0), note);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::OfflineFetcher;
    use crate::content::Language;
    use crate::graphics::image::tests::png_bytes;
    use crate::graphics::Image;
    use crate::text::Font;
    use std::sync::Arc;

    #[test]
    fn test_header_counter_and_scope() {
        let content = BriefContent::builtin(Language::English).unwrap();
        let ctx = RenderContext::new(Font::Helvetica, &OfflineFetcher);
        let mut surface = ctx.new_surface();
        let before = surface.style();

        header(&mut surface, &ctx, &PageContext::new(2, Language::English), &content);

        let ops = surface.page().graphics_operations();
        assert!(ops.contains("(Project brief premium - Page 2/4) Tj"));
        assert!(ops.contains("(Kah-Digital) Tj"));
        assert!(ops.starts_with("q\n"));
        assert!(ops.ends_with("Q\n"));
        assert_eq!(surface.style(), before);
        assert!(surface.page().images().is_empty());
    }

    #[test]
    fn test_header_draws_logo() {
        let content = BriefContent::builtin(Language::French).unwrap();
        let logo = Arc::new(Image::from_bytes(&png_bytes(4, 4)).unwrap());
        let ctx = RenderContext::new(Font::Helvetica, &OfflineFetcher).with_logo(Some(logo));
        let mut surface = ctx.new_surface();

        header(&mut surface, &ctx, &PageContext::new(1, Language::French), &content);
        assert_eq!(surface.page().images().len(), 1);
        assert!(surface.page().graphics_operations().contains("/Im1 Do"));
    }

    #[test]
    fn test_footer_rule_and_note() {
        let ctx = RenderContext::new(Font::Helvetica, &OfflineFetcher);
        let mut surface = ctx.new_surface();

        footer(&mut surface, &ctx, "Please complete the fields.");
        let ops = surface.page().graphics_operations();
        assert!(ops.contains(&format!("{:.2} {:.2} m", mm(20.0), mm(18.0))));
        assert!(ops.contains("(Please complete the fields.) Tj"));
    }
}
