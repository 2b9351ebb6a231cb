use super::{catalogue, paired, PageComposer};
use crate::content::BriefContent;
use crate::geometry::mm;
use crate::layout::{card, checkbox, field, paragraph, Cursor, ParagraphStyle, RenderContext, FIELD_HEIGHT};
use crate::surface::DrawingSurface;
use crate::Result;

/// Page 2: design, integrations and screens
#[derive(Debug, Clone, Copy, Default)]
pub struct TechnicalPage;

impl PageComposer for TechnicalPage {
    fn title<'c>(&self, content: &'c BriefContent) -> (&'c str, &'c str) {
        (&content.page2.title, &content.page2.subtitle)
    }

    fn compose_body(
        &self,
        surface: &mut DrawingSurface,
        ctx: &RenderContext<'_>,
        content: &BriefContent,
    ) -> Result<()> {
        let page = &content.page2;
        let g = ctx.geometry;
        let top = g.content_top();
        let full = g.full_width();
        let inner_x = g.margin + 10.0;

        let mut design = Cursor::new(card(surface, ctx, g.margin, top, full, mm(60.0), &page.cards.design));
        design.advance_to(paragraph(
            surface,
            ctx,
            &page.design_hint,
            inner_x,
            design.y(),
            full - 20.0,
            ParagraphStyle::hint(ctx),
        ));
        design.skip(6.0);
        let [references, available] = catalogue::DESIGN;
        design.advance_to(field(
            surface,
            ctx,
            &page.fields.design_references,
            inner_x,
            design.y(),
            full - 20.0,
            Some(references),
            FIELD_HEIGHT,
        ));
        field(
            surface,
            ctx,
            &page.fields.design_content,
            inner_x,
            design.y(),
            full - 20.0,
            Some(available),
            FIELD_HEIGHT,
        );

        let integrations_top = card(
            surface,
            ctx,
            g.margin,
            top - mm(68.0),
            full,
            mm(62.0),
            &page.cards.integrations,
        );
        let columns = [
            (inner_x, "page2.integrations_left", &page.integrations_left, &catalogue::INTEGRATIONS_LEFT),
            (
                g.margin + full / 2.0 + 10.0,
                "page2.integrations_right",
                &page.integrations_right,
                &catalogue::INTEGRATIONS_RIGHT,
            ),
        ];
        for (x, key, labels, names) in columns {
            let mut cursor = Cursor::new(integrations_top);
            for (label, name) in paired(key, labels, names)? {
                cursor.advance_to(checkbox(surface, ctx, label, x, cursor.y(), full / 2.0 - 20.0, Some(name)));
            }
        }

        let mut screens = Cursor::new(card(
            surface,
            ctx,
            g.margin,
            top - mm(140.0),
            full,
            mm(52.0),
            &page.cards.pages,
        ));
        let screen_labels = [&page.fields.pages_primary, &page.fields.pages_secondary];
        for (label, name) in screen_labels.into_iter().zip(catalogue::SCREENS) {
            let next = field(surface, ctx, label, inner_x, screens.y(), full - 20.0, Some(name), FIELD_HEIGHT);
            screens.advance_to(next);
        }

        Ok(())
    }
}
