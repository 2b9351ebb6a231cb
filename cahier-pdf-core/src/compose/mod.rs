//! The four page layouts of the brief
//!
//! Each composer paints the shared chrome, its title block and its cards at
//! fixed positions computed from the page geometry. Nothing reflows: copy
//! that is too long for a card simply runs past it.

pub mod catalogue;
pub mod chrome;
mod modules;
mod planning;
mod project;
mod technical;

pub use modules::ModulesPage;
pub use planning::PlanningPage;
pub use project::ProjectPage;
pub use technical::TechnicalPage;

use crate::content::{BriefContent, PageContext, TOTAL_PAGES};
use crate::error::{PdfError, Result};
use crate::layout::RenderContext;
use crate::surface::DrawingSurface;

/// One page layout
pub trait PageComposer {
    /// Title and subtitle of the page
    fn title<'c>(&self, content: &'c BriefContent) -> (&'c str, &'c str);

    /// Paint the cards between the title block and the footer
    fn compose_body(
        &self,
        surface: &mut DrawingSurface,
        ctx: &RenderContext<'_>,
        content: &BriefContent,
    ) -> Result<()>;

    /// Paint the whole page: chrome, title block, body and footer
    fn compose(
        &self,
        surface: &mut DrawingSurface,
        ctx: &RenderContext<'_>,
        page: &PageContext,
        content: &BriefContent,
    ) -> Result<()> {
        chrome::header(surface, ctx, page, content);
        let (title, subtitle) = self.title(content);
        chrome::title_block(surface, ctx, title, subtitle);
        self.compose_body(surface, ctx, content)?;
        chrome::footer(surface, ctx, &content.footer_note);
        Ok(())
    }
}

/// Composers of the brief, in page order
pub fn standard_pages() -> [&'static dyn PageComposer; TOTAL_PAGES] {
    [&ProjectPage, &TechnicalPage, &PlanningPage, &ModulesPage]
}

/// Pair content labels with catalogue names, failing on a length mismatch
pub(crate) fn paired<'c>(
    key: &str,
    labels: &'c [String],
    names: &'static [&'static str],
) -> Result<impl Iterator<Item = (&'c str, &'static str)>> {
    if labels.len() != names.len() {
        return Err(PdfError::invalid_content(
            key,
            format!("expected {} entries, found {}", names.len(), labels.len()),
        ));
    }
    Ok(labels.iter().map(String::as_str).zip(names.iter().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::OfflineFetcher;
    use crate::content::Language;
    use crate::text::Font;
    use std::collections::HashSet;

    fn render(language: Language, page_number: usize) -> DrawingSurface {
        let content = BriefContent::builtin(language).unwrap();
        let ctx = RenderContext::new(Font::Helvetica, &OfflineFetcher);
        let mut surface = ctx.new_surface();
        let page = PageContext::new(page_number, language);
        standard_pages()[page_number - 1]
            .compose(&mut surface, &ctx, &page, &content)
            .unwrap();
        surface
    }

    #[test]
    fn test_each_page_places_its_catalogue() {
        for language in Language::ALL {
            for page_number in 1..=TOTAL_PAGES {
                let surface = render(language, page_number);
                let placed: Vec<&str> = surface
                    .page()
                    .widgets()
                    .iter()
                    .map(|w| w.name.as_str())
                    .collect();
                let expected: Vec<&str> = catalogue::page_fields(page_number).collect();
                assert_eq!(
                    placed.iter().collect::<HashSet<_>>(),
                    expected.iter().collect::<HashSet<_>>(),
                    "page {page_number} ({language})"
                );
                assert_eq!(placed.len(), expected.len());
            }
        }
    }

    #[test]
    fn test_cards_do_not_overlap() {
        for page_number in 1..=TOTAL_PAGES {
            let surface = render(Language::French, page_number);
            let cards = surface.cards();
            assert!(!cards.is_empty(), "page {page_number} has no cards");
            for (i, a) in cards.iter().enumerate() {
                for b in &cards[i + 1..] {
                    assert!(
                        !a.bounds().intersects(&b.bounds()),
                        "'{}' overlaps '{}' on page {page_number}",
                        a.title,
                        b.title
                    );
                }
            }
        }
    }

    #[test]
    fn test_widgets_stay_inside_their_cards() {
        for page_number in 1..=TOTAL_PAGES {
            let surface = render(Language::English, page_number);
            for widget in surface.page().widgets() {
                assert!(
                    surface.cards().iter().any(|c| c.bounds().contains(&widget.rect)),
                    "{} is outside every card",
                    widget.name
                );
            }
        }
    }

    #[test]
    fn test_chrome_on_every_page() {
        for page_number in 1..=TOTAL_PAGES {
            let surface = render(Language::English, page_number);
            let ops = surface.page().graphics_operations();
            assert!(ops.contains(&format!("Page {page_number}/4) Tj")));
            assert!(ops.contains("(This document is the base to frame the project. Please complete the fields.) Tj"));
        }
    }

    #[test]
    fn test_card_geometry_does_not_depend_on_font() {
        use crate::fonts::test_font::build_test_font;
        use crate::fonts::TrueTypeFont;
        use std::sync::Arc;

        let ttf = TrueTypeFont::from_bytes("NotoSans", build_test_font(1000, 520)).unwrap();
        let embedded = Font::Embedded(Arc::new(ttf));
        let content = BriefContent::builtin(Language::French).unwrap();

        for page_number in 1..=TOTAL_PAGES {
            let page = PageContext::new(page_number, Language::French);
            let composer = standard_pages()[page_number - 1];

            let helvetica_ctx = RenderContext::new(Font::Helvetica, &OfflineFetcher);
            let mut helvetica = helvetica_ctx.new_surface();
            composer.compose(&mut helvetica, &helvetica_ctx, &page, &content).unwrap();

            let embedded_ctx = RenderContext::new(embedded.clone(), &OfflineFetcher);
            let mut with_font = embedded_ctx.new_surface();
            composer.compose(&mut with_font, &embedded_ctx, &page, &content).unwrap();

            assert_eq!(helvetica.cards(), with_font.cards(), "page {page_number}");
            let names = |s: &DrawingSurface| -> Vec<String> {
                s.page().widgets().iter().map(|w| w.name.clone()).collect()
            };
            assert_eq!(names(&helvetica), names(&with_font));
        }
    }

    #[test]
    fn test_paired_rejects_length_mismatch() {
        let labels = vec!["B2B".to_string()];
        let err = paired("page1.audience_labels", &labels, &catalogue::AUDIENCE)
            .err()
            .unwrap();
        assert!(err.to_string().contains("page1.audience_labels"));
    }
}
