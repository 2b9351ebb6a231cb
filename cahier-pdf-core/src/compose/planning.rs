use super::{catalogue, paired, PageComposer};
use crate::content::BriefContent;
use crate::geometry::mm;
use crate::layout::{card, field, table_row, Cursor, RenderContext, RowValue, FIELD_HEIGHT};
use crate::surface::DrawingSurface;
use crate::Result;

/// Width of the date fields in the planning table
const DATE_FIELD_WIDTH: f64 = 70.0;

/// Height of the signature boxes
const SIGNATURE_HEIGHT: f64 = 45.0;

/// Page 3: planning table, signatures and payment terms
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanningPage;

impl PageComposer for PlanningPage {
    fn title<'c>(&self, content: &'c BriefContent) -> (&'c str, &'c str) {
        (&content.page3.title, &content.page3.subtitle)
    }

    fn compose_body(
        &self,
        surface: &mut DrawingSurface,
        ctx: &RenderContext<'_>,
        content: &BriefContent,
    ) -> Result<()> {
        let page = &content.page3;
        let g = ctx.geometry;
        let top = g.content_top();
        let full = g.full_width();

        let mut plan = Cursor::new(card(surface, ctx, g.margin, top, full, mm(96.0), &page.cards.planning));
        surface.scoped(|s| {
            s.set_font(8.0, ctx.theme.muted)
                .text_right(g.margin + full - 10.0, plan.y(), &page.planning_target);
        });
        plan.skip(12.0);
        for (label, name) in paired("page3.planning_rows", &page.planning_rows, &catalogue::PLANNING)? {
            plan.advance_to(table_row(
                surface,
                ctx,
                g.margin + 10.0,
                plan.y(),
                full - 20.0,
                label,
                RowValue::Field {
                    name,
                    width: DATE_FIELD_WIDTH,
                },
            ));
        }

        let sign_top = card(
            surface,
            ctx,
            g.margin,
            top - mm(114.0),
            full,
            mm(56.0),
            &page.cards.signature,
        );
        let [client_name, client_sign, kd_name, kd_sign] = catalogue::SIGNATURE;
        let labels = &page.fields;
        let columns = [
            (g.margin + 10.0, (&labels.sign_client_name, client_name), (&labels.sign_client, client_sign)),
            (g.margin + full / 2.0 + 10.0, (&labels.sign_kd_name, kd_name), (&labels.sign_kd, kd_sign)),
        ];
        for (x, (name_label, name_field), (sign_label, sign_field)) in columns {
            let mut cursor = Cursor::new(sign_top);
            cursor.advance_to(field(
                surface,
                ctx,
                name_label,
                x,
                cursor.y(),
                full / 2.0 - 20.0,
                Some(name_field),
                FIELD_HEIGHT,
            ));
            field(
                surface,
                ctx,
                sign_label,
                x,
                cursor.y(),
                full / 2.0 - 20.0,
                Some(sign_field),
                SIGNATURE_HEIGHT,
            );
        }

        surface.scoped(|s| {
            s.set_font(8.0, ctx.theme.muted)
                .text(g.margin, mm(30.0), &page.terms_note);
        });

        Ok(())
    }
}
