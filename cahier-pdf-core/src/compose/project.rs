use super::{catalogue, paired, PageComposer};
use crate::content::BriefContent;
use crate::geometry::mm;
use crate::layout::{card, checkbox, field, paragraph, Cursor, ParagraphStyle, RenderContext, FIELD_HEIGHT};
use crate::surface::DrawingSurface;
use crate::Result;

/// Page 1: project, contact, impact, audience and features
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectPage;

impl PageComposer for ProjectPage {
    fn title<'c>(&self, content: &'c BriefContent) -> (&'c str, &'c str) {
        (&content.page1.title, &content.page1.subtitle)
    }

    fn compose_body(
        &self,
        surface: &mut DrawingSurface,
        ctx: &RenderContext<'_>,
        content: &BriefContent,
    ) -> Result<()> {
        let page = &content.page1;
        let labels = &page.fields;
        let g = ctx.geometry;
        let top = g.content_top();
        let col_w = g.column_width();
        let (left_x, right_x) = (g.left_x(), g.right_x());

        let mut left = Cursor::new(card(
            surface,
            ctx,
            left_x,
            top,
            col_w,
            mm(86.0),
            &page.cards.project,
        ));
        let project_labels = [
            &labels.project_name,
            &labels.project_type,
            &labels.project_goal,
            &labels.project_budget,
            &labels.project_date,
        ];
        for (label, name) in project_labels.into_iter().zip(catalogue::PROJECT) {
            let next = field(surface, ctx, label, left_x + 10.0, left.y(), col_w - 20.0, Some(name), FIELD_HEIGHT);
            left.advance_to(next);
        }

        let mut left = Cursor::new(card(
            surface,
            ctx,
            left_x,
            top - mm(90.0),
            col_w,
            mm(54.0),
            &page.cards.impact,
        ));
        left.advance_to(paragraph(
            surface,
            ctx,
            &page.impact_hint,
            left_x + 10.0,
            left.y(),
            col_w - 20.0,
            ParagraphStyle::hint(ctx),
        ));
        left.skip(2.0);
        field(
            surface,
            ctx,
            &labels.impact_detail,
            left_x + 10.0,
            left.y(),
            col_w - 20.0,
            Some(catalogue::IMPACT),
            FIELD_HEIGHT,
        );

        let mut right = Cursor::new(card(
            surface,
            ctx,
            right_x,
            top,
            col_w,
            mm(86.0),
            &page.cards.contact,
        ));
        let contact_labels = [
            &labels.contact_name_role,
            &labels.contact_email,
            &labels.contact_phone,
            &labels.contact_company,
            &labels.contact_location,
        ];
        for (label, name) in contact_labels.into_iter().zip(catalogue::CONTACT) {
            let next = field(surface, ctx, label, right_x + 10.0, right.y(), col_w - 20.0, Some(name), FIELD_HEIGHT);
            right.advance_to(next);
        }

        let mut right = Cursor::new(card(
            surface,
            ctx,
            right_x,
            top - mm(90.0),
            col_w,
            mm(54.0),
            &page.cards.audience,
        ));
        for (label, name) in paired("page1.audience_labels", &page.audience_labels, &catalogue::AUDIENCE)? {
            right.advance_to(checkbox(surface, ctx, label, right_x + 10.0, right.y(), col_w - 20.0, Some(name)));
        }

        let full = g.full_width();
        let features_top = card(
            surface,
            ctx,
            g.margin,
            top - mm(150.0),
            full,
            mm(52.0),
            &page.cards.features,
        );
        let columns = [
            (g.margin + 10.0, "page1.features_left", &page.features_left, &catalogue::FEATURES_LEFT),
            (g.margin + full / 2.0 + 10.0, "page1.features_right", &page.features_right, &catalogue::FEATURES_RIGHT),
        ];
        for (x, key, column_labels, names) in columns {
            let mut cursor = Cursor::new(features_top);
            for (label, name) in paired(key, column_labels, names)? {
                cursor.advance_to(checkbox(surface, ctx, label, x, cursor.y(), full / 2.0 - 20.0, Some(name)));
            }
        }

        Ok(())
    }
}
