use super::PageComposer;
use crate::content::BriefContent;
use crate::geometry::mm;
use crate::layout::{media_row, Cursor, RenderContext};
use crate::surface::DrawingSurface;
use crate::Result;
use std::sync::Arc;
use tracing::warn;

/// Page 4: one media row per module
#[derive(Debug, Clone, Copy, Default)]
pub struct ModulesPage;

impl PageComposer for ModulesPage {
    fn title<'c>(&self, content: &'c BriefContent) -> (&'c str, &'c str) {
        (&content.page4.title, &content.page4.subtitle)
    }

    fn compose_body(
        &self,
        surface: &mut DrawingSurface,
        ctx: &RenderContext<'_>,
        content: &BriefContent,
    ) -> Result<()> {
        let g = ctx.geometry;
        let mut cursor = Cursor::new(g.content_top());

        for item in &content.page4.items {
            let image = match ctx.fetcher.fetch(&item.image) {
                Ok(image) => Some(Arc::new(image)),
                Err(error) => {
                    warn!(%error, module = %item.title, "drawing image placeholder");
                    None
                }
            };
            cursor.advance_to(media_row(
                surface,
                ctx,
                g.margin,
                cursor.y(),
                g.full_width(),
                mm(30.0),
                item,
                image,
            ));
        }

        Ok(())
    }
}
