use crate::error::{PdfError, Result};
use crate::objects::{Dictionary, Object};

#[derive(Debug, Clone)]
pub struct Stream {
    dictionary: Dictionary,
    data: Vec<u8>,
}

impl Stream {
    pub fn new(data: Vec<u8>) -> Self {
        Self::with_dictionary(Dictionary::new(), data)
    }

    pub fn with_dictionary(dictionary: Dictionary, data: Vec<u8>) -> Self {
        let mut dict = dictionary;
        dict.set("Length", data.len() as i64);

        Self {
            dictionary: dict,
            data,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.dictionary
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.dictionary.set("Filter", Object::name(filter));
    }

    pub fn compress_flate(&mut self) -> Result<()> {
        self.data = deflate(&self.data)?;
        self.dictionary.set("Length", self.data.len() as i64);
        self.set_filter("FlateDecode");

        Ok(())
    }

    /// Compressed stream ready to be written as an indirect object.
    pub fn into_compressed_object(mut self) -> Result<Object> {
        self.compress_flate()?;
        Ok(self.into_object())
    }

    pub fn into_object(self) -> Object {
        Object::Stream(self.dictionary, self.data)
    }
}

/// Zlib-wrapped deflate, as expected by `/FlateDecode`.
pub fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| PdfError::CompressionError(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| PdfError::CompressionError(e.to_string()))
}
