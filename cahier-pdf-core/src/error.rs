use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Font error: {0}")]
    FontError(String),

    #[error("Compression error: {0}")]
    CompressionError(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid content at '{key}': {reason}")]
    InvalidContent { key: String, reason: String },

    #[error("Content parse error: {0}")]
    ContentParse(#[from] serde_json::Error),

    #[error("Duplicate form field name: {0}")]
    DuplicateField(String),

    #[error("Expected {expected} pages, document has {actual}")]
    PageCount { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, PdfError>;

impl PdfError {
    pub(crate) fn invalid_content(key: impl Into<String>, reason: impl Into<String>) -> Self {
        PdfError::InvalidContent {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
