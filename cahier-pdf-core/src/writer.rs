use crate::document::Document;
use crate::error::Result;
use crate::fonts::{standard_font_dict, FontEmbedder};
use crate::forms::{checkbox_appearances, text_field_appearance, AcroForm, FieldKind};
use crate::graphics::Image;
use crate::objects::{Dictionary, Object, ObjectId, Stream};
use crate::page::Page;
use crate::text::Font;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Resource name of the body font on every page
pub const BODY_FONT_RESOURCE: &str = "F1";

/// Object ids of the fonts shared by every page
#[derive(Debug, Clone, Copy)]
struct FontIds {
    body: ObjectId,
    helvetica: ObjectId,
    zapf_dingbats: ObjectId,
}

pub struct PdfWriter<W: Write> {
    writer: W,
    xref_positions: HashMap<ObjectId, u64>,
    current_position: u64,
    next_object_id: u32,
    /// Images already written, keyed by their shared allocation
    image_ids: HashMap<*const Image, ObjectId>,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            xref_positions: HashMap::new(),
            current_position: 0,
            next_object_id: 1,
            image_ids: HashMap::new(),
        }
    }

    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        self.write_header()?;

        let catalog_id = self.allocate_object_id();
        let pages_id = self.allocate_object_id();

        let fonts = self.write_fonts(&document.body_font)?;
        let mut acro_form = AcroForm::new();
        acro_form.add_font("Helv", fonts.helvetica);
        acro_form.add_font("ZaDb", fonts.zapf_dingbats);

        let mut kids = Vec::with_capacity(document.pages.len());
        for (index, page) in document.pages.iter().enumerate() {
            let page_id = self.write_page(page, pages_id, fonts, &mut acro_form)?;
            debug!(page = index + 1, object = %page_id, "wrote page");
            kids.push(Object::Reference(page_id));
        }

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::name("Pages"));
        pages_dict.set("Kids", Object::Array(kids));
        pages_dict.set("Count", Object::Integer(document.pages.len() as i64));
        self.write_object(pages_id, Object::Dictionary(pages_dict))?;

        self.write_catalog(catalog_id, pages_id, &acro_form)?;
        let info_id = self.write_info(document)?;

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(catalog_id, info_id, xref_position)?;

        self.writer.flush()?;
        Ok(())
    }

    fn allocate_object_id(&mut self) -> ObjectId {
        let id = ObjectId::new(self.next_object_id, 0);
        self.next_object_id += 1;
        id
    }

    /// Write `object` under a freshly allocated id
    fn add_object(&mut self, object: Object) -> Result<ObjectId> {
        let id = self.allocate_object_id();
        self.write_object(id, object)?;
        Ok(id)
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.7\n")?;
        // Binary comment to ensure file is treated as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    fn write_catalog(
        &mut self,
        catalog_id: ObjectId,
        pages_id: ObjectId,
        acro_form: &AcroForm,
    ) -> Result<()> {
        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::name("Catalog"));
        catalog.set("Pages", Object::Reference(pages_id));
        if !acro_form.fields.is_empty() {
            catalog.set("AcroForm", Object::Dictionary(acro_form.to_dict()));
        }

        self.write_object(catalog_id, Object::Dictionary(catalog))
    }

    /// Helvetica and ZapfDingbats for form fields, plus the body font. A
    /// Helvetica body shares the form font object.
    fn write_fonts(&mut self, body_font: &Font) -> Result<FontIds> {
        let helvetica = self.add_object(Object::Dictionary(standard_font_dict(
            "Helvetica",
            Some("WinAnsiEncoding"),
        )))?;
        let zapf_dingbats =
            self.add_object(Object::Dictionary(standard_font_dict("ZapfDingbats", None)))?;

        let body = match body_font {
            Font::Helvetica => helvetica,
            Font::Embedded(font) => {
                let embedder = FontEmbedder::new(font);
                let font_file_id = self.add_object(embedder.font_file_object()?)?;
                let descriptor_id =
                    self.add_object(Object::Dictionary(embedder.descriptor_dict(font_file_id)))?;
                self.add_object(Object::Dictionary(embedder.font_dict(descriptor_id)))?
            }
        };

        Ok(FontIds {
            body,
            helvetica,
            zapf_dingbats,
        })
    }

    fn write_page(
        &mut self,
        page: &Page,
        parent_id: ObjectId,
        fonts: FontIds,
        acro_form: &mut AcroForm,
    ) -> Result<ObjectId> {
        let page_id = self.allocate_object_id();

        let content = Stream::new(page.content()).into_compressed_object()?;
        let content_id = self.add_object(content)?;

        let mut font_dict = Dictionary::new();
        font_dict.set(BODY_FONT_RESOURCE, Object::Reference(fonts.body));
        font_dict.set("Helv", Object::Reference(fonts.helvetica));
        font_dict.set("ZaDb", Object::Reference(fonts.zapf_dingbats));

        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(font_dict));

        if !page.images().is_empty() {
            let mut xobject_dict = Dictionary::new();
            for (name, image) in page.images() {
                let image_id = self.write_image(image)?;
                xobject_dict.set(name.clone(), Object::Reference(image_id));
            }
            resources.set("XObject", Object::Dictionary(xobject_dict));
        }

        let mut annots = Vec::with_capacity(page.widgets().len());
        for widget in page.widgets() {
            let normal = match widget.kind {
                FieldKind::Text { .. } => {
                    Object::Reference(self.add_object(text_field_appearance(widget)?)?)
                }
                FieldKind::CheckBox => {
                    let (yes, off) = checkbox_appearances(widget, fonts.zapf_dingbats)?;
                    let mut states = Dictionary::new();
                    states.set("Yes", Object::Reference(self.add_object(yes)?));
                    states.set("Off", Object::Reference(self.add_object(off)?));
                    Object::Dictionary(states)
                }
            };
            let widget_id = self.add_object(Object::Dictionary(
                widget.to_annotation_dict(page_id, normal),
            ))?;
            acro_form.add_field(widget_id);
            annots.push(Object::Reference(widget_id));
        }

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::name("Page"));
        page_dict.set("Parent", Object::Reference(parent_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width()),
                Object::Real(page.height()),
            ]),
        );
        page_dict.set("Resources", Object::Dictionary(resources));
        page_dict.set("Contents", Object::Reference(content_id));
        if !annots.is_empty() {
            page_dict.set("Annots", Object::Array(annots));
        }

        self.write_object(page_id, Object::Dictionary(page_dict))?;
        Ok(page_id)
    }

    /// Image XObject (and soft mask), written once per shared image
    fn write_image(&mut self, image: &Arc<Image>) -> Result<ObjectId> {
        let key = Arc::as_ptr(image);
        if let Some(id) = self.image_ids.get(&key) {
            return Ok(*id);
        }

        let smask_id = match image.to_smask_object()? {
            Some(smask) => Some(self.add_object(smask)?),
            None => None,
        };
        let image_id = self.add_object(image.to_pdf_object(smask_id)?)?;
        self.image_ids.insert(key, image_id);
        Ok(image_id)
    }

    fn write_info(&mut self, document: &Document) -> Result<ObjectId> {
        let metadata = &document.metadata;
        let mut info_dict = Dictionary::new();

        let entries = [
            ("Title", &metadata.title),
            ("Author", &metadata.author),
            ("Subject", &metadata.subject),
            ("Creator", &metadata.creator),
            ("Producer", &metadata.producer),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                info_dict.set(key, Object::String(value.clone()));
            }
        }

        if let Some(creation_date) = metadata.creation_date {
            info_dict.set("CreationDate", Object::String(format_pdf_date(creation_date)));
        }

        self.add_object(Object::Dictionary(info_dict))
    }
}

impl PdfWriter<BufWriter<std::fs::File>> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::new_with_writer(BufWriter::new(file)))
    }
}

impl<W: Write> PdfWriter<W> {
    fn write_object(&mut self, id: ObjectId, object: Object) -> Result<()> {
        self.xref_positions.insert(id, self.current_position);

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;

        self.write_object_value(&object)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Null => self.write_bytes(b"null")?,
            Object::Boolean(b) => self.write_bytes(if *b { b"true" } else { b"false" })?,
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(format_real(*f).as_bytes())?,
            Object::String(s) => self.write_bytes(encode_string(s).as_bytes())?,
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => self.write_dictionary(dict)?,
            Object::Stream(dict, data) => {
                self.write_dictionary(dict)?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(data)?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => {
                let ref_str = format!("{} {} R", id.number(), id.generation());
                self.write_bytes(ref_str.as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_dictionary(&mut self, dict: &Dictionary) -> Result<()> {
        self.write_bytes(b"<<")?;
        for (key, value) in dict.entries() {
            self.write_bytes(b"\n/")?;
            self.write_bytes(key.as_bytes())?;
            self.write_bytes(b" ")?;
            self.write_object_value(value)?;
        }
        self.write_bytes(b"\n>>")
    }

    fn write_xref(&mut self) -> Result<()> {
        self.write_bytes(b"xref\n")?;

        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        // One subsection from 0 to max
        self.write_bytes(format!("0 {}\n", max_obj_num + 1).as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;

        for obj_num in 1..=max_obj_num {
            match self.xref_positions.get(&ObjectId::new(obj_num, 0)) {
                Some(position) => {
                    let entry = format!("{position:010} 00000 n \n");
                    self.write_bytes(entry.as_bytes())?;
                }
                // Free entry for a gap
                None => self.write_bytes(b"0000000000 00000 f \n")?,
            }
        }

        Ok(())
    }

    fn write_trailer(
        &mut self,
        catalog_id: ObjectId,
        info_id: ObjectId,
        xref_position: u64,
    ) -> Result<()> {
        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        let mut trailer = Dictionary::new();
        trailer.set("Size", Object::Integer((max_obj_num + 1) as i64));
        trailer.set("Root", Object::Reference(catalog_id));
        trailer.set("Info", Object::Reference(info_id));

        self.write_bytes(b"trailer\n")?;
        self.write_dictionary(&trailer)?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(xref_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;

        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

/// Shortest decimal form with at most 6 fractional digits
fn format_real(value: f64) -> String {
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Literal string for ASCII text, UTF-16BE hex string with a byte order
/// mark otherwise.
fn encode_string(text: &str) -> String {
    if text.is_ascii() {
        let mut out = String::with_capacity(text.len() + 2);
        out.push('(');
        out.push_str(&crate::text::escape_literal(text.as_bytes()));
        out.push(')');
        return out;
    }

    let mut out = String::from("<FEFF");
    for unit in text.encode_utf16() {
        write!(&mut out, "{unit:04X}").unwrap();
    }
    out.push('>');
    out
}

/// Format a DateTime as a PDF date string (D:YYYYMMDDHHmmSSOHH'mm)
fn format_pdf_date(date: DateTime<Utc>) -> String {
    let formatted = date.format("D:%Y%m%d%H%M%S");

    // For UTC, the offset is always +00'00
    format!("{formatted}+00'00")
}
