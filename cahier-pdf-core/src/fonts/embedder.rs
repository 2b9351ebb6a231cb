//! Font dictionaries for PDF generation

use super::TrueTypeFont;
use crate::objects::{Dictionary, Object, ObjectId, Stream};
use crate::Result;

/// First code written to a simple font's `Widths` array
pub const FIRST_CHAR: u8 = 32;
/// Last code written to a simple font's `Widths` array
pub const LAST_CHAR: u8 = 255;

/// Dictionary for one of the standard 14 fonts, which viewers provide
/// without embedding. Symbolic fonts such as ZapfDingbats take no
/// encoding.
pub fn standard_font_dict(base_font: &str, encoding: Option<&str>) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::name("Font"));
    dict.set("Subtype", Object::name("Type1"));
    dict.set("BaseFont", Object::name(base_font));
    if let Some(encoding) = encoding {
        dict.set("Encoding", Object::name(encoding));
    }
    dict
}

/// Builds the three objects that embed a TrueType font: the compressed
/// font program, its descriptor and the font dictionary itself.
pub struct FontEmbedder<'a> {
    font: &'a TrueTypeFont,
}

impl<'a> FontEmbedder<'a> {
    /// Create a new font embedder
    pub fn new(font: &'a TrueTypeFont) -> Self {
        FontEmbedder { font }
    }

    /// `FontFile2` stream holding the whole font program
    pub fn font_file_object(&self) -> Result<Object> {
        let mut dict = Dictionary::new();
        dict.set("Length1", Object::Integer(self.font.data.len() as i64));
        Stream::with_dictionary(dict, self.font.data.clone()).into_compressed_object()
    }

    /// Font descriptor pointing at the embedded program
    pub fn descriptor_dict(&self, font_file_id: ObjectId) -> Dictionary {
        let mut descriptor = self.font.descriptor.clone();
        descriptor.missing_width = self.font.code_width(0);
        descriptor.to_dict(Some(font_file_id))
    }

    /// Simple TrueType font dictionary with `WinAnsiEncoding`
    pub fn font_dict(&self, descriptor_id: ObjectId) -> Dictionary {
        let mut dict = Dictionary::new();

        dict.set("Type", Object::name("Font"));
        dict.set("Subtype", Object::name("TrueType"));
        dict.set("BaseFont", Object::name(self.font.postscript_name()));
        dict.set("Encoding", Object::name("WinAnsiEncoding"));
        dict.set("FirstChar", Object::Integer(FIRST_CHAR as i64));
        dict.set("LastChar", Object::Integer(LAST_CHAR as i64));

        let widths = self
            .font
            .widths()
            .into_iter()
            .map(|width| Object::Integer(width.round() as i64))
            .collect::<Vec<_>>();
        dict.set("Widths", Object::Array(widths));
        dict.set("FontDescriptor", Object::Reference(descriptor_id));

        dict
    }
}
