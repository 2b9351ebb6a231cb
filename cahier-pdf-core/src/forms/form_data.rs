//! AcroForm generation and field name bookkeeping

use crate::error::{PdfError, Result};
use crate::objects::{Dictionary, Object, ObjectId};
use std::collections::HashSet;

/// Interactive form dictionary (AcroForm)
#[derive(Debug, Clone)]
pub struct AcroForm {
    /// Form fields
    pub fields: Vec<ObjectId>,
    /// Need appearances flag
    pub need_appearances: bool,
    /// Default appearance
    pub da: String,
    /// Fonts available to field appearances, by resource name
    pub fonts: Vec<(String, ObjectId)>,
}

impl AcroForm {
    /// Create a new AcroForm
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            need_appearances: true,
            da: "/Helv 0 Tf 0 g".to_string(),
            fonts: Vec::new(),
        }
    }

    /// Add a field reference
    pub fn add_field(&mut self, field_ref: ObjectId) {
        self.fields.push(field_ref);
    }

    /// Make a font available under `name` in the default resources
    pub fn add_font(&mut self, name: impl Into<String>, font_ref: ObjectId) {
        self.fonts.push((name.into(), font_ref));
    }

    /// Convert to dictionary
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::new();

        let fields: Vec<Object> = self.fields.iter().map(|r| Object::Reference(*r)).collect();
        dict.set("Fields", Object::Array(fields));
        dict.set("NeedAppearances", Object::Boolean(self.need_appearances));
        dict.set("DA", Object::String(self.da.clone()));

        let fonts: Dictionary = self
            .fonts
            .iter()
            .map(|(name, id)| (name.clone(), Object::Reference(*id)))
            .collect();
        let mut dr = Dictionary::new();
        dr.set("Font", Object::Dictionary(fonts));
        dict.set("DR", Object::Dictionary(dr));

        dict
    }
}

impl Default for AcroForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Field names registered in one document, in registration order.
///
/// A second registration of the same name is an error: two fields named
/// alike would be merged by viewers into one value.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field name
    pub fn register(&mut self, name: &str) -> Result<()> {
        if !self.seen.insert(name.to_string()) {
            return Err(PdfError::DuplicateField(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acro_form_dict() {
        let mut form = AcroForm::new();
        form.add_field(ObjectId::new(10, 0));
        form.add_field(ObjectId::new(11, 0));
        form.add_font("Helv", ObjectId::new(3, 0));
        form.add_font("ZaDb", ObjectId::new(4, 0));

        let dict = form.to_dict();
        assert_eq!(dict.get("Fields").and_then(Object::as_array).map(Vec::len), Some(2));
        assert_eq!(dict.get("NeedAppearances"), Some(&Object::Boolean(true)));
        assert_eq!(
            dict.get("DA").and_then(Object::as_string),
            Some("/Helv 0 Tf 0 g")
        );

        let fonts = dict.get_dict("DR").and_then(|dr| dr.get_dict("Font")).unwrap();
        assert_eq!(fonts.get("Helv"), Some(&Object::Reference(ObjectId::new(3, 0))));
        assert_eq!(fonts.get("ZaDb"), Some(&Object::Reference(ObjectId::new(4, 0))));
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut registry = FieldRegistry::new();
        registry.register("project_name").unwrap();
        registry.register("contact_email").unwrap();

        let err = registry.register("project_name").unwrap_err();
        assert!(matches!(err, PdfError::DuplicateField(ref name) if name == "project_name"));
        assert_eq!(registry.names(), ["project_name", "contact_email"]);
        assert!(registry.contains("contact_email"));
        assert_eq!(registry.len(), 2);
    }
}
