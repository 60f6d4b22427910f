//! Single-page raster source for scanned images and photos.

use std::path::Path;

use image::{imageops::FilterType, DynamicImage, GenericImageView};

use crate::error::ViewerError;
use crate::geometry::{PageMetrics, RectF};
use crate::source::PageSource;

/// An image file treated as a one-page document. One pixel maps to one
/// document point at zoom 1.0, so the geometry code needs no special case.
pub struct ImageSource {
    image: DynamicImage,
}

impl ImageSource {
    pub fn open(path: &Path) -> Result<Self, ViewerError> {
        Ok(Self {
            image: image::open(path)?,
        })
    }

    /// The decoded image at native resolution, for whole-image OCR.
    pub fn full_image(&self) -> &DynamicImage {
        &self.image
    }
}

impl PageSource for ImageSource {
    fn page_count(&self) -> usize {
        1
    }

    fn page_metrics(&self, index: usize) -> Result<PageMetrics, ViewerError> {
        if index != 0 {
            return Err(ViewerError::Image(image::ImageError::Parameter(
                image::error::ParameterError::from_kind(
                    image::error::ParameterErrorKind::DimensionMismatch,
                ),
            )));
        }
        Ok(PageMetrics {
            width: self.image.width() as f32,
            height: self.image.height() as f32,
        })
    }

    fn render_page(&self, index: usize, scale: f32) -> Result<DynamicImage, ViewerError> {
        self.page_metrics(index)?;
        if (scale - 1.0).abs() < f32::EPSILON {
            return Ok(self.image.clone());
        }
        let width = ((self.image.width() as f32 * scale).round() as u32).max(1);
        let height = ((self.image.height() as f32 * scale).round() as u32).max(1);
        Ok(self.image.resize_exact(width, height, FilterType::Triangle))
    }

    fn text_in_rect(&self, index: usize, _rect: RectF) -> Result<String, ViewerError> {
        self.page_metrics(index)?;
        // No native text layer; the viewer falls through to OCR.
        Ok(String::new())
    }

    fn page_text(&self, index: usize) -> Result<String, ViewerError> {
        self.page_metrics(index)?;
        Ok(String::new())
    }

    fn has_text_layer(&self) -> bool {
        false
    }
}
