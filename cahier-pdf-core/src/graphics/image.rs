//! Raster images embedded as image XObjects
//!
//! Any format the `image` crate is built with (PNG and JPEG here) is decoded
//! to 8-bit RGB. Transparency is kept as a separate soft mask so logos with
//! an alpha channel render without a black box behind them.

use crate::objects::{Dictionary, Object, ObjectId, Stream};
use crate::{PdfError, Result};
use std::path::Path;

/// A decoded image that can be embedded in a PDF
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    /// Interleaved RGB samples, 8 bits per component
    rgb: Vec<u8>,
    /// One alpha sample per pixel, only present when some pixel is not opaque
    alpha: Option<Vec<u8>>,
}

impl Image {
    /// Decode an encoded image held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| PdfError::InvalidImage(e.to_string()))?;
        let (width, height) = (decoded.width(), decoded.height());
        if width == 0 || height == 0 {
            return Err(PdfError::InvalidImage("image has no pixels".into()));
        }

        if decoded.color().has_alpha() {
            let rgba = decoded.to_rgba8();
            let mut rgb = Vec::with_capacity((width * height * 3) as usize);
            let mut alpha = Vec::with_capacity((width * height) as usize);
            for pixel in rgba.pixels() {
                rgb.extend_from_slice(&pixel.0[..3]);
                alpha.push(pixel.0[3]);
            }
            let alpha = if alpha.iter().all(|&a| a == u8::MAX) {
                None
            } else {
                Some(alpha)
            };
            Ok(Image {
                width,
                height,
                rgb,
                alpha,
            })
        } else {
            Ok(Image {
                width,
                height,
                rgb: decoded.to_rgb8().into_raw(),
                alpha: None,
            })
        }
    }

    /// Load and decode an image file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Get image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Placement of this image inside a `width` x `height` box at `(x, y)`,
    /// scaled to fit with its aspect ratio kept and centered.
    pub fn fit_within(&self, x: f64, y: f64, width: f64, height: f64) -> (f64, f64, f64, f64) {
        let scale = (width / self.width as f64).min(height / self.height as f64);
        let w = self.width as f64 * scale;
        let h = self.height as f64 * scale;
        (x + (width - w) / 2.0, y + (height - h) / 2.0, w, h)
    }

    /// Image XObject, pointing at `smask` when the image has transparency.
    pub fn to_pdf_object(&self, smask: Option<ObjectId>) -> Result<Object> {
        let mut dict = self.base_dictionary("DeviceRGB");
        if let Some(mask_id) = smask {
            dict.set("SMask", Object::Reference(mask_id));
        }
        Stream::with_dictionary(dict, self.rgb.clone()).into_compressed_object()
    }

    /// Soft mask XObject built from the alpha channel, if there is one.
    pub fn to_smask_object(&self) -> Result<Option<Object>> {
        match &self.alpha {
            Some(alpha) => {
                let dict = self.base_dictionary("DeviceGray");
                Ok(Some(
                    Stream::with_dictionary(dict, alpha.clone()).into_compressed_object()?,
                ))
            }
            None => Ok(None),
        }
    }

    fn base_dictionary(&self, color_space: &str) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("XObject"));
        dict.set("Subtype", Object::name("Image"));
        dict.set("Width", Object::Integer(self.width as i64));
        dict.set("Height", Object::Integer(self.height as i64));
        dict.set("ColorSpace", Object::name(color_space));
        dict.set("BitsPerComponent", Object::Integer(8));
        dict
    }
}
