//! PDF page source backed by pdfium.

use std::path::Path;

use image::DynamicImage;
use pdfium_render::prelude::*;

use crate::error::ViewerError;
use crate::geometry::{PageMetrics, RectF};
use crate::source::PageSource;

/// Characters whose vertical centers differ by more than this many points
/// are treated as separate lines when assembling extracted text.
const LINE_BREAK_TOLERANCE: f32 = 3.0;

/// A PDF document loaded through pdfium.
pub struct PdfSource {
    document: PdfDocument<'static>,
}

impl PdfSource {
    /// Load a PDF from disk, binding pdfium from the system library path.
    pub fn open(path: &Path) -> Result<Self, ViewerError> {
        // pdfium's document borrows the library binding; leaking the
        // binding gives the document a 'static lifetime for the duration
        // of the viewer window.
        let pdfium = Box::leak(Box::new(Pdfium::new(
            Pdfium::bind_to_system_library().map_err(|e| ViewerError::Pdf(e.to_string()))?,
        )));
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ViewerError::Pdf(e.to_string()))?;
        Ok(Self { document })
    }

    fn page(&self, index: usize) -> Result<PdfPage<'_>, ViewerError> {
        self.document
            .pages()
            .get(index as u16)
            .map_err(|e| ViewerError::Pdf(format!("page {index}: {e}")))
    }
}

impl PageSource for PdfSource {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_metrics(&self, index: usize) -> Result<PageMetrics, ViewerError> {
        let page = self.page(index)?;
        Ok(PageMetrics {
            width: page.width().value,
            height: page.height().value,
        })
    }

    fn render_page(&self, index: usize, scale: f32) -> Result<DynamicImage, ViewerError> {
        let page = self.page(index)?;
        let target_width = (page.width().value * scale).round().max(1.0) as i32;
        let config = PdfRenderConfig::new().set_target_width(target_width);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| ViewerError::Pdf(format!("render page {index}: {e}")))?;
        Ok(bitmap.as_image())
    }

    fn text_in_rect(&self, index: usize, rect: RectF) -> Result<String, ViewerError> {
        let page = self.page(index)?;
        let page_height = page.height().value;
        let text_page = page
            .text()
            .map_err(|e| ViewerError::Pdf(format!("text layer, page {index}: {e}")))?;

        // Collect characters whose centers fall inside the selection.
        // Char bounds come back in PDF space (origin bottom-left); the
        // selection rect is top-left-origin, so flip y.
        let mut hits: Vec<(char, f32, f32)> = Vec::new();
        for char_info in text_page.chars().iter() {
            let Ok(bounds) = char_info.loose_bounds() else {
                continue;
            };
            let Some(s) = char_info.unicode_string() else {
                continue;
            };
            let Some(ch) = s.chars().next() else {
                continue;
            };
            let cx = (bounds.left().value + bounds.right().value) / 2.0;
            let cy = page_height - (bounds.top().value + bounds.bottom().value) / 2.0;
            if rect.contains(cx, cy) {
                hits.push((ch, cx, cy));
            }
        }

        // Top-to-bottom, then left-to-right.
        hits.sort_by(|a, b| {
            a.2.partial_cmp(&b.2)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        });

        let mut out = String::new();
        let mut last_cy: Option<f32> = None;
        for (ch, _cx, cy) in hits {
            if let Some(prev) = last_cy {
                if (cy - prev).abs() > LINE_BREAK_TOLERANCE {
                    // Trailing whitespace inside a line is kept; pdfium
                    // emits its own spaces.
                    out.push('\n');
                }
            }
            out.push(ch);
            last_cy = Some(cy);
        }
        Ok(out)
    }

    fn page_text(&self, index: usize) -> Result<String, ViewerError> {
        let page = self.page(index)?;
        let text_page = page
            .text()
            .map_err(|e| ViewerError::Pdf(format!("text layer, page {index}: {e}")))?;
        Ok(text_page.all())
    }

    fn has_text_layer(&self) -> bool {
        true
    }
}
