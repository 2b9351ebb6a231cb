//! Interactive form fields (AcroForm)
//!
//! Only the two field types the brief needs are supported: single-line
//! text boxes and checkboxes. Each field has exactly one widget, so the
//! field and its widget annotation share one dictionary.

mod appearance;
mod field;
mod form_data;

pub use appearance::{checkbox_appearances, text_field_appearance};
pub use field::{BorderStyle, FieldKind, Widget, WidgetAppearance};
pub use form_data::{AcroForm, FieldRegistry};
