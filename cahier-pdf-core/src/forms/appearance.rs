//! Appearance streams for form widgets
//!
//! Viewers regenerate appearances because the AcroForm sets
//! `NeedAppearances`, but the streams keep the boxes visible in viewers
//! that ignore that flag.

use super::{FieldKind, Widget};
use crate::graphics::GraphicsContext;
use crate::objects::{Dictionary, Object, ObjectId, Stream};
use crate::Result;
use std::fmt::Write;

/// ZapfDingbats advance of the `4` (check mark) glyph, in ems
const CHECK_GLYPH_WIDTH: f64 = 0.846;

/// Normal appearance of a text field: background and border
pub fn text_field_appearance(widget: &Widget) -> Result<Object> {
    let mut content = frame(widget);
    content.push_str("/Tx BMC\nEMC\n");
    form_xobject(widget, content, None)
}

/// `(Yes, Off)` appearances of a checkbox. The on state draws a
/// ZapfDingbats check in the widget's text color.
pub fn checkbox_appearances(widget: &Widget, zapf_dingbats: ObjectId) -> Result<(Object, Object)> {
    debug_assert_eq!(widget.kind, FieldKind::CheckBox);

    let width = widget.rect.width();
    let height = widget.rect.height();
    let size = height * 0.8;
    let x = (width - CHECK_GLYPH_WIDTH * size) / 2.0;
    let y = (height - size * 0.7) / 2.0;

    let mut on = frame(widget);
    on.push_str("q\nBT\n");
    writeln!(&mut on, "{}", widget.appearance.text_color.fill_operator()).unwrap();
    writeln!(&mut on, "/ZaDb {size:.2} Tf").unwrap();
    writeln!(&mut on, "{x:.2} {y:.2} Td").unwrap();
    on.push_str("(4) Tj\nET\nQ\n");

    let mut fonts = Dictionary::new();
    fonts.set("ZaDb", Object::Reference(zapf_dingbats));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));

    Ok((
        form_xobject(widget, on, Some(resources))?,
        form_xobject(widget, frame(widget), None)?,
    ))
}

/// Background fill plus a border inset by half its width
fn frame(widget: &Widget) -> String {
    let width = widget.rect.width();
    let height = widget.rect.height();
    let border = widget.appearance.border_width;

    let mut gc = GraphicsContext::new();
    gc.set_fill_color(widget.appearance.background_color)
        .rect(0.0, 0.0, width, height)
        .fill();
    if border > 0.0 {
        gc.set_stroke_color(widget.appearance.border_color)
            .set_line_width(border)
            .rect(
                border / 2.0,
                border / 2.0,
                (width - border).max(0.0),
                (height - border).max(0.0),
            )
            .stroke();
    }
    gc.operations().to_string()
}

fn form_xobject(widget: &Widget, content: String, resources: Option<Dictionary>) -> Result<Object> {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::name("XObject"));
    dict.set("Subtype", Object::name("Form"));
    dict.set(
        "BBox",
        Object::rect(0.0, 0.0, widget.rect.width(), widget.rect.height()),
    );
    if let Some(resources) = resources {
        dict.set("Resources", Object::Dictionary(resources));
    }
    Stream::with_dictionary(dict, content.into_bytes()).into_compressed_object()
}
