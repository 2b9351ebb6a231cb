//! Font descriptor structures for PDF font embedding

use crate::objects::{Dictionary, Object, ObjectId};
use bitflags::bitflags;

bitflags! {
    /// Font descriptor flags as defined in PDF specification
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FontFlags: u32 {
        /// All glyphs have the same width
        const FIXED_PITCH = 1 << 0;
        /// Glyphs have serifs
        const SERIF = 1 << 1;
        /// Font contains glyphs outside Adobe standard Latin set
        const SYMBOLIC = 1 << 2;
        /// Font uses Adobe standard Latin character set
        const NONSYMBOLIC = 1 << 5;
        /// Font is italic
        const ITALIC = 1 << 6;
    }
}

/// PDF Font Descriptor, all lengths in glyph space (1000 units per em)
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font name (PostScript name)
    pub font_name: String,
    /// Font family name
    pub font_family: String,
    /// Font flags
    pub flags: FontFlags,
    /// Font bounding box [llx, lly, urx, ury]
    pub font_bbox: [f64; 4],
    /// Italic angle in degrees
    pub italic_angle: f64,
    /// Ascent value
    pub ascent: f64,
    /// Descent value (typically negative)
    pub descent: f64,
    /// Cap height
    pub cap_height: f64,
    /// Stem width
    pub stem_v: f64,
    /// Width of missing character
    pub missing_width: f64,
}

impl FontDescriptor {
    /// Convert to PDF dictionary
    pub fn to_dict(&self, font_file_ref: Option<ObjectId>) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("Type", Object::name("FontDescriptor"));
        dict.set("FontName", Object::name(self.font_name.clone()));
        dict.set("FontFamily", Object::String(self.font_family.clone()));
        dict.set("Flags", Object::Integer(self.flags.bits() as i64));
        dict.set(
            "FontBBox",
            Object::rect(
                self.font_bbox[0].round(),
                self.font_bbox[1].round(),
                self.font_bbox[2].round(),
                self.font_bbox[3].round(),
            ),
        );
        dict.set("ItalicAngle", Object::Real(self.italic_angle));
        dict.set("Ascent", Object::Real(self.ascent.round()));
        dict.set("Descent", Object::Real(self.descent.round()));
        dict.set("CapHeight", Object::Real(self.cap_height.round()));
        dict.set("StemV", Object::Real(self.stem_v));
        dict.set("MissingWidth", Object::Real(self.missing_width.round()));

        if let Some(font_file_id) = font_file_ref {
            dict.set("FontFile2", Object::Reference(font_file_id));
        }

        dict
    }
}
