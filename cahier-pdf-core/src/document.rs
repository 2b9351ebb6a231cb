use crate::error::Result;
use crate::forms::FieldRegistry;
use crate::page::Page;
use crate::text::Font;
use crate::writer::PdfWriter;
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;

/// A PDF document: ordered pages, metadata, the names of every form field
/// and the body font its text runs are set in.
///
/// Field names are checked as pages are added, so a document that exists
/// never holds two fields with the same name.
#[derive(Debug)]
pub struct Document {
    pub(crate) pages: Vec<Page>,
    pub(crate) metadata: DocumentMetadata,
    pub(crate) fields: FieldRegistry,
    pub(crate) body_font: Font,
}

/// Metadata for a PDF document.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Software that created the original document
    pub creator: Option<String>,
    /// Software that produced the PDF
    pub producer: Option<String>,
    /// Date and time the document was created
    pub creation_date: Option<DateTime<Utc>>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            creator: Some("cahier-pdf".to_string()),
            producer: Some(format!("cahier-pdf v{}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(Utc::now()),
        }
    }
}

impl Document {
    /// Creates a new empty document whose text is set in `body_font`.
    pub fn new(body_font: Font) -> Self {
        Self {
            pages: Vec::new(),
            metadata: DocumentMetadata::default(),
            fields: FieldRegistry::new(),
            body_font,
        }
    }

    /// Adds a page, registering the names of its widgets.
    ///
    /// # Errors
    ///
    /// Fails with [`PdfError::DuplicateField`](crate::PdfError::DuplicateField)
    /// when a widget reuses a name already present in the document. The page
    /// is not added in that case.
    pub fn add_page(&mut self, page: Page) -> Result<()> {
        let mut fields = self.fields.clone();
        for widget in page.widgets() {
            fields.register(&widget.name)?;
        }
        self.fields = fields;
        self.pages.push(page);
        Ok(())
    }

    /// Sets the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    /// Sets the document author.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata.author = Some(author.into());
    }

    /// Sets the document subject.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.metadata.subject = Some(subject.into());
    }

    /// Sets the document creator (software that created the original document).
    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.metadata.creator = Some(creator.into());
    }

    /// Sets the document producer (software that produced the PDF).
    pub fn set_producer(&mut self, producer: impl Into<String>) {
        self.metadata.producer = Some(producer.into());
    }

    /// Sets the document creation date.
    pub fn set_creation_date(&mut self, date: DateTime<Utc>) {
        self.metadata.creation_date = Some(date);
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Gets the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Field names in the order their pages were added
    pub fn field_names(&self) -> &[String] {
        self.fields.names()
    }

    pub fn body_font(&self) -> &Font {
        &self.body_font
    }

    /// Saves the document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = PdfWriter::new(path)?;
        writer.write_document(self)?;
        Ok(())
    }

    /// Writes the document to any byte sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the PDF cannot be generated.
    pub fn write<W: Write>(&self, sink: W) -> Result<()> {
        let mut writer = PdfWriter::new_with_writer(sink);
        writer.write_document(self)?;
        Ok(())
    }
}
