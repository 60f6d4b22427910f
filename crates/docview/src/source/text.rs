//! Plain-text source.
//!
//! Plain files are shown in a text pane that handles its own selection and
//! scrolling, so this source never rasterizes; it only feeds copy-all and
//! the pane's content.

use std::path::Path;

use image::DynamicImage;

use crate::error::ViewerError;
use crate::geometry::{PageMetrics, RectF};
use crate::source::PageSource;

/// US Letter in points, reported so layout code has something sane.
const FALLBACK_PAGE: PageMetrics = PageMetrics { width: 612.0, height: 792.0 };

pub struct TextSource {
    content: String,
}

impl TextSource {
    pub fn open(path: &Path) -> Result<Self, ViewerError> {
        Ok(Self {
            content: std::fs::read_to_string(path)?,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl PageSource for TextSource {
    fn page_count(&self) -> usize {
        1
    }

    fn page_metrics(&self, _index: usize) -> Result<PageMetrics, ViewerError> {
        Ok(FALLBACK_PAGE)
    }

    fn render_page(&self, _index: usize, _scale: f32) -> Result<DynamicImage, ViewerError> {
        Err(ViewerError::NotAvailable)
    }

    fn text_in_rect(&self, _index: usize, _rect: RectF) -> Result<String, ViewerError> {
        // Rubber-band selection does not apply to the text pane.
        Ok(String::new())
    }

    fn page_text(&self, _index: usize) -> Result<String, ViewerError> {
        Ok(self.content.clone())
    }

    fn has_text_layer(&self) -> bool {
        true
    }
}
