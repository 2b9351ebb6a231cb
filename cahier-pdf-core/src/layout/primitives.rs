use super::RenderContext;
use crate::content::MediaItem;
use crate::geometry::Rectangle;
use crate::graphics::{Color, Image};
use crate::surface::{CardSpec, DrawingSurface, FieldSpec};
use crate::text::wrap_text;
use std::sync::Arc;

/// Corner radius of cards and media rows
pub const CARD_RADIUS: f64 = 8.0;

/// Distance from a card's top edge to its first row of content
pub const CARD_TITLE_OFFSET: f64 = 28.0;

/// Default height of a text field
pub const FIELD_HEIGHT: f64 = 12.0;

/// Side of a checkbox
pub const CHECKBOX_SIZE: f64 = 10.0;

const CARD_BORDER_WIDTH: f64 = 0.7;
const RULE_WIDTH: f64 = 0.6;
const WIDGET_FONT_SIZE: f64 = 9.0;
const CHECKBOX_LINE_HEIGHT: f64 = 12.0;

/// Size, leading and color of a wrapped paragraph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub size: f64,
    pub leading: f64,
    pub color: Color,
}

impl ParagraphStyle {
    /// Hints inside cards: 9 pt on 12 pt, muted
    pub fn hint(ctx: &RenderContext<'_>) -> Self {
        Self {
            size: 9.0,
            leading: 12.0,
            color: ctx.theme.muted,
        }
    }

    /// Media row summaries: 8 pt on 9 pt, muted
    pub fn summary(ctx: &RenderContext<'_>) -> Self {
        Self {
            size: 8.0,
            leading: 9.0,
            color: ctx.theme.muted,
        }
    }
}

/// What a table row shows on its right edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowValue<'a> {
    Empty,
    /// Right-aligned muted text
    Text(&'a str),
    /// Text field of the given width
    Field { name: &'a str, width: f64 },
}

/// Rounded panel with a title. Returns the first content row.
pub fn card(
    surface: &mut DrawingSurface,
    ctx: &RenderContext<'_>,
    x: f64,
    y_top: f64,
    width: f64,
    height: f64,
    title: &str,
) -> f64 {
    {
        let mut s = surface.scope();
        panel(&mut s, ctx, x, y_top, width, height);
        s.set_font(10.0, ctx.theme.text).text(x + 10.0, y_top - 16.0, title);
    }
    surface.record_card(CardSpec {
        title: title.to_string(),
        x,
        y_top,
        width,
        height,
    });
    y_top - CARD_TITLE_OFFSET
}

/// Caption followed by a text field, or by a rule when `name` is `None`.
#[allow(clippy::too_many_arguments)]
pub fn field(
    surface: &mut DrawingSurface,
    ctx: &RenderContext<'_>,
    label: &str,
    x: f64,
    y: f64,
    width: f64,
    name: Option<&str>,
    height: f64,
) -> f64 {
    let mut s = surface.scope();
    s.set_font(8.0, ctx.theme.muted).text(x, y, label);

    match name {
        Some(name) => {
            let field_y = y - height - 6.0;
            s.set_fill_color(ctx.theme.field_background)
                .fill_rect(x, field_y, width, height);
            s.text_field(
                name,
                Rectangle::from_position_and_size(x, field_y, width, height),
                WIDGET_FONT_SIZE,
                ctx.theme.text_field_appearance(),
            );
            s.record_field(FieldSpec {
                label: label.to_string(),
                x,
                y: field_y,
                width,
                height,
                field_name: Some(name.to_string()),
            });
            field_y - 12.0
        }
        None => {
            s.set_stroke_color(ctx.theme.line)
                .set_line_width(RULE_WIDTH)
                .line(x, y - 6.0, x + width, y - 6.0);
            s.record_field(FieldSpec {
                label: label.to_string(),
                x,
                y: y - 6.0,
                width,
                height: 0.0,
                field_name: None,
            });
            y - 18.0
        }
    }
}

/// Checkbox (interactive when named) with a label wrapped to the
/// remaining width. Each extra label line moves the result down 12 pt.
pub fn checkbox(
    surface: &mut DrawingSurface,
    ctx: &RenderContext<'_>,
    label: &str,
    x: f64,
    y: f64,
    width: f64,
    name: Option<&str>,
) -> f64 {
    let box_y = y - CHECKBOX_SIZE + 1.0;
    let font = surface.font().clone();
    let lines = wrap_text(label, width - CHECKBOX_SIZE - 10.0, |t| font.measure(t, 9.0));

    let mut s = surface.scope();
    match name {
        Some(name) => {
            s.checkbox(
                name,
                Rectangle::from_position_and_size(x, box_y, CHECKBOX_SIZE, CHECKBOX_SIZE),
                ctx.theme.checkbox_appearance(),
            );
        }
        None => {
            s.set_stroke_color(ctx.theme.accent)
                .set_line_width(1.1)
                .set_fill_color(ctx.theme.field_background)
                .fill_stroke_rect(x, box_y, CHECKBOX_SIZE, CHECKBOX_SIZE);
        }
    }
    s.record_field(FieldSpec {
        label: label.to_string(),
        x,
        y: box_y,
        width: CHECKBOX_SIZE,
        height: CHECKBOX_SIZE,
        field_name: name.map(str::to_string),
    });

    let label_x = x + CHECKBOX_SIZE + 6.0;
    let mut y = y;
    s.set_font(9.0, ctx.theme.text);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            y -= CHECKBOX_LINE_HEIGHT;
        }
        s.text(label_x, y, line);
    }
    y - 16.0
}

/// Greedy word-wrapped text, one line per `leading`. Returns the baseline
/// below the last line.
pub fn paragraph(
    surface: &mut DrawingSurface,
    _ctx: &RenderContext<'_>,
    text: &str,
    x: f64,
    y: f64,
    width: f64,
    style: ParagraphStyle,
) -> f64 {
    let font = surface.font().clone();
    let lines = wrap_text(text, width, |t| font.measure(t, style.size));

    let mut s = surface.scope();
    s.set_font(style.size, style.color);
    let mut y = y;
    for line in &lines {
        s.text(x, y, line);
        y -= style.leading;
    }
    y
}

/// Label on the left, a value or a small field on the right, and a rule
/// under both.
pub fn table_row(
    surface: &mut DrawingSurface,
    ctx: &RenderContext<'_>,
    x: f64,
    y: f64,
    width: f64,
    left: &str,
    value: RowValue<'_>,
) -> f64 {
    let mut s = surface.scope();
    s.set_font(9.0, ctx.theme.text).text(x, y, left);

    match value {
        RowValue::Field {
            name,
            width: field_width,
        } => {
            let field_x = x + width - field_width;
            let field_y = y - 12.0;
            let height = 10.0;
            s.set_fill_color(ctx.theme.field_background)
                .fill_rect(field_x, field_y, field_width, height);
            s.text_field(
                name,
                Rectangle::from_position_and_size(field_x, field_y, field_width, height),
                WIDGET_FONT_SIZE,
                ctx.theme.text_field_appearance(),
            );
            s.record_field(FieldSpec {
                label: left.to_string(),
                x: field_x,
                y: field_y,
                width: field_width,
                height,
                field_name: Some(name.to_string()),
            });
        }
        RowValue::Text(text) => {
            s.set_font(9.0, ctx.theme.muted).text_right(x + width, y, text);
        }
        RowValue::Empty => {}
    }

    s.set_stroke_color(ctx.theme.line)
        .set_line_width(RULE_WIDTH)
        .line(x, y - 6.0, x + width, y - 6.0);
    y - 16.0
}

/// Panel with a square illustration on the left and a text block on the
/// right. Without an image the square is a flat placeholder of the same
/// size.
#[allow(clippy::too_many_arguments)]
pub fn media_row(
    surface: &mut DrawingSurface,
    ctx: &RenderContext<'_>,
    x: f64,
    y_top: f64,
    width: f64,
    height: f64,
    item: &MediaItem,
    image: Option<Arc<Image>>,
) -> f64 {
    let img_size = height - 12.0;
    let img_x = x + 8.0;
    let img_y = y_top - height + 6.0;
    let text_x = img_x + img_size + 10.0;
    let text_w = width - (img_size + 20.0);

    {
        let mut s = surface.scope();
        panel(&mut s, ctx, x, y_top, width, height);

        match image {
            Some(image) => {
                let (ix, iy, iw, ih) = image.fit_within(img_x, img_y, img_size, img_size);
                s.image(image, ix, iy, iw, ih);
            }
            None => {
                s.set_fill_color(ctx.theme.field_background)
                    .fill_rect(img_x, img_y, img_size, img_size);
            }
        }

        let title_y = y_top - 12.0;
        s.set_font(10.0, ctx.theme.text).text(text_x, title_y, &item.title);
        paragraph(
            &mut s,
            ctx,
            &item.summary,
            text_x,
            title_y - 10.0,
            text_w,
            ParagraphStyle::summary(ctx),
        );
        s.set_font(8.0, ctx.theme.accent)
            .text(text_x, y_top - height + 18.0, &item.pricing);
        s.set_font(8.0, ctx.theme.muted)
            .text(text_x, y_top - height + 8.0, &item.timeline);
    }

    surface.record_card(CardSpec {
        title: item.title.clone(),
        x,
        y_top,
        width,
        height,
    });
    y_top - height - 6.0
}

/// Card fill and border shared by cards and media rows
fn panel(s: &mut DrawingSurface, ctx: &RenderContext<'_>, x: f64, y_top: f64, width: f64, height: f64) {
    let y = y_top - height;
    s.set_fill_color(ctx.theme.card)
        .fill_round_rect(x, y, width, height, CARD_RADIUS);
    s.set_stroke_color(ctx.theme.line)
        .set_line_width(CARD_BORDER_WIDTH)
        .stroke_round_rect(x, y, width, height, CARD_RADIUS);
}
