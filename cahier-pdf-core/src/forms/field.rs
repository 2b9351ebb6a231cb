//! Form field and widget definitions

use crate::geometry::Rectangle;
use crate::graphics::Color;
use crate::objects::{Dictionary, Object, ObjectId};

/// Annotation flag: print the widget with the page
const PRINT_FLAG: i64 = 4;

/// Widget appearance settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetAppearance {
    /// Border color
    pub border_color: Color,
    /// Background color
    pub background_color: Color,
    /// Color of the value text, or of the check mark
    pub text_color: Color,
    /// Border width
    pub border_width: f64,
    /// Border style
    pub border_style: BorderStyle,
}

/// Border style for widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    /// Solid border
    Solid,
    /// Dashed border
    Dashed,
    /// Underline only
    Underline,
}

impl BorderStyle {
    /// Get PDF name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "S",
            BorderStyle::Dashed => "D",
            BorderStyle::Underline => "U",
        }
    }
}

impl Default for WidgetAppearance {
    fn default() -> Self {
        Self {
            border_color: Color::black(),
            background_color: Color::white(),
            text_color: Color::black(),
            border_width: 1.0,
            border_style: BorderStyle::Solid,
        }
    }
}

/// What kind of field a widget belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Single-line text box, filled in with Helvetica at `font_size`
    Text { font_size: f64 },
    /// Checkbox, initially off
    CheckBox,
}

/// A named field with its single widget annotation
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// Fully qualified field name (`/T`)
    pub name: String,
    /// Field type
    pub kind: FieldKind,
    /// Rectangle for widget position
    pub rect: Rectangle,
    /// Appearance settings
    pub appearance: WidgetAppearance,
}

impl Widget {
    /// Create a text field widget
    pub fn text(name: impl Into<String>, rect: Rectangle, font_size: f64) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text { font_size },
            rect,
            appearance: WidgetAppearance::default(),
        }
    }

    /// Create a checkbox widget
    pub fn checkbox(name: impl Into<String>, rect: Rectangle) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::CheckBox,
            rect,
            appearance: WidgetAppearance::default(),
        }
    }

    /// Set appearance
    pub fn with_appearance(mut self, appearance: WidgetAppearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Default appearance string (`/DA`) used by viewers to render values
    pub fn default_appearance(&self) -> String {
        match self.kind {
            FieldKind::Text { font_size } => format!(
                "/Helv {font_size} Tf {}",
                self.appearance.text_color.fill_operator()
            ),
            FieldKind::CheckBox => {
                format!("/ZaDb 0 Tf {}", self.appearance.text_color.fill_operator())
            }
        }
    }

    /// Merged field and widget annotation dictionary.
    ///
    /// `normal_appearance` is the `/AP /N` entry: a stream reference for
    /// text fields, a `/Yes` + `/Off` state dictionary for checkboxes.
    pub fn to_annotation_dict(&self, page_id: ObjectId, normal_appearance: Object) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("Type", Object::name("Annot"));
        dict.set("Subtype", Object::name("Widget"));
        dict.set("T", Object::String(self.name.clone()));
        dict.set(
            "Rect",
            Object::rect(
                self.rect.lower_left.x,
                self.rect.lower_left.y,
                self.rect.upper_right.x,
                self.rect.upper_right.y,
            ),
        );
        dict.set("F", Object::Integer(PRINT_FLAG));
        dict.set("P", Object::Reference(page_id));
        dict.set("DA", Object::String(self.default_appearance()));

        let mut mk = Dictionary::new();
        mk.set("BC", self.appearance.border_color.to_pdf_array());
        mk.set("BG", self.appearance.background_color.to_pdf_array());

        match self.kind {
            FieldKind::Text { .. } => {
                dict.set("FT", Object::name("Tx"));
            }
            FieldKind::CheckBox => {
                dict.set("FT", Object::name("Btn"));
                dict.set("V", Object::name("Off"));
                dict.set("AS", Object::name("Off"));
                // ZapfDingbats check mark
                mk.set("CA", Object::String("4".into()));
            }
        }
        dict.set("MK", Object::Dictionary(mk));

        let mut bs = Dictionary::new();
        bs.set("W", Object::Real(self.appearance.border_width));
        bs.set("S", Object::name(self.appearance.border_style.pdf_name()));
        dict.set("BS", Object::Dictionary(bs));

        let mut ap = Dictionary::new();
        ap.set("N", normal_appearance);
        dict.set("AP", Object::Dictionary(ap));

        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accent() -> WidgetAppearance {
        WidgetAppearance {
            border_color: Color::rgb(0.839, 0.702, 0.416),
            background_color: Color::gray(0.1),
            text_color: Color::white(),
            border_width: 0.9,
            border_style: BorderStyle::Solid,
        }
    }

    #[test]
    fn test_border_style() {
        assert_eq!(BorderStyle::Solid.pdf_name(), "S");
        assert_eq!(BorderStyle::Dashed.pdf_name(), "D");
        assert_eq!(BorderStyle::Underline.pdf_name(), "U");
    }

    #[test]
    fn test_text_widget_dict() {
        let rect = Rectangle::from_position_and_size(50.0, 50.0, 100.0, 12.0);
        let widget = Widget::text("project_name", rect, 9.0).with_appearance(accent());
        let dict = widget.to_annotation_dict(ObjectId::new(5, 0), Object::Reference(ObjectId::new(8, 0)));

        assert_eq!(dict.get("FT").and_then(Object::as_name), Some("Tx"));
        assert_eq!(dict.get("T").and_then(Object::as_string), Some("project_name"));
        assert_eq!(
            dict.get("DA").and_then(Object::as_string),
            Some("/Helv 9 Tf 1.000 g")
        );
        assert_eq!(dict.get("F"), Some(&Object::Integer(4)));
        assert_eq!(dict.get("P"), Some(&Object::Reference(ObjectId::new(5, 0))));

        let bs = dict.get_dict("BS").unwrap();
        assert_eq!(bs.get("W"), Some(&Object::Real(0.9)));
        assert_eq!(bs.get("S").and_then(Object::as_name), Some("S"));

        let mk = dict.get_dict("MK").unwrap();
        assert!(mk.contains_key("BC"));
        assert!(mk.contains_key("BG"));
        assert!(!mk.contains_key("CA"));
        assert!(!dict.contains_key("V"));
    }

    #[test]
    fn test_checkbox_widget_dict() {
        let rect = Rectangle::from_position_and_size(0.0, 0.0, 10.0, 10.0);
        let widget = Widget::checkbox("audience_b2b", rect).with_appearance(accent());
        let dict = widget.to_annotation_dict(ObjectId::new(5, 0), Object::Dictionary(Dictionary::new()));

        assert_eq!(dict.get("FT").and_then(Object::as_name), Some("Btn"));
        assert_eq!(dict.get("V").and_then(Object::as_name), Some("Off"));
        assert_eq!(dict.get("AS").and_then(Object::as_name), Some("Off"));
        assert_eq!(
            dict.get_dict("MK").and_then(|mk| mk.get("CA")).and_then(Object::as_string),
            Some("4")
        );
        assert!(dict
            .get("DA")
            .and_then(Object::as_string)
            .is_some_and(|da| da.starts_with("/ZaDb 0 Tf")));
        assert!(dict.get_dict("AP").is_some_and(|ap| ap.contains_key("N")));
    }
}
