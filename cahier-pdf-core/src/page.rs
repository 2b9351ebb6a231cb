use crate::forms::Widget;
use crate::geometry::mm;
use crate::graphics::{GraphicsContext, Image};
use std::sync::Arc;

/// A single page in a PDF document.
///
/// Pages have a size (width and height in points), one content stream
/// built through [`GraphicsContext`], the images it paints and the form
/// widgets placed on it.
#[derive(Clone, Debug)]
pub struct Page {
    width: f64,
    height: f64,
    graphics_context: GraphicsContext,
    images: Vec<(String, Arc<Image>)>,
    widgets: Vec<Widget>,
}

impl Page {
    /// Creates a new page with the specified width and height in points.
    ///
    /// Points are 1/72 of an inch.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            graphics_context: GraphicsContext::new(),
            images: Vec::new(),
            widgets: Vec::new(),
        }
    }

    /// Creates a new A4 page (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(mm(210.0), mm(297.0))
    }

    /// Returns a mutable reference to the graphics context for drawing.
    pub fn graphics(&mut self) -> &mut GraphicsContext {
        &mut self.graphics_context
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Registers an image and returns its resource name. Registering the
    /// same shared image twice returns the existing name.
    pub fn add_image(&mut self, image: Arc<Image>) -> String {
        if let Some((name, _)) = self.images.iter().find(|(_, i)| Arc::ptr_eq(i, &image)) {
            return name.clone();
        }
        let name = format!("Im{}", self.images.len() + 1);
        self.images.push((name.clone(), image));
        name
    }

    /// Registers `image` and paints it into the given box.
    pub fn draw_image(&mut self, image: Arc<Image>, x: f64, y: f64, width: f64, height: f64) {
        let name = self.add_image(image);
        self.graphics_context.draw_image(&name, x, y, width, height);
    }

    pub fn images(&self) -> &[(String, Arc<Image>)] {
        &self.images
    }

    pub fn add_widget(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Content stream operators written so far
    pub fn graphics_operations(&self) -> &str {
        self.graphics_context.operations()
    }

    /// Uncompressed content stream bytes
    pub fn content(&self) -> Vec<u8> {
        self.graphics_context.operations().as_bytes().to_vec()
    }
}
