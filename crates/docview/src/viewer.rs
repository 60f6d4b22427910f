//! The viewer itself: load, zoom, region selection, copy-all.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView};

use crate::error::ViewerError;
use crate::geometry::{PageLayout, PageMetrics, RectF, ZoomState};
use crate::kind::DocumentKind;
use crate::ocr::TextRecognizer;
use crate::source::{ImageSource, PageSource, PdfSource, TextSource};

/// Scale used when rasterizing for OCR: roughly 300 dpi, which is what the
/// recognition models were trained on.
const OCR_RENDER_SCALE: f32 = 300.0 / 72.0;

/// A document open in the viewer.
///
/// Office formats load with no in-process pages; the caller hands them to
/// the platform opener and every page operation returns
/// [`ViewerError::NotAvailable`].
pub struct DocumentView {
    path: PathBuf,
    kind: DocumentKind,
    source: Option<Box<dyn PageSource>>,
    layout: PageLayout,
    zoom: ZoomState,
    recognizer: Box<dyn TextRecognizer>,
}

impl DocumentView {
    /// Load `path`, dispatching on its detected kind.
    pub fn open(path: &Path, recognizer: Box<dyn TextRecognizer>) -> Result<Self, ViewerError> {
        let kind = DocumentKind::detect(path)?;
        let source: Option<Box<dyn PageSource>> = match kind {
            DocumentKind::Pdf => Some(Box::new(PdfSource::open(path)?)),
            DocumentKind::Image => Some(Box::new(ImageSource::open(path)?)),
            DocumentKind::PlainText => Some(Box::new(TextSource::open(path)?)),
            DocumentKind::External => None,
        };

        let layout = match &source {
            Some(source) => {
                let mut pages = Vec::with_capacity(source.page_count());
                for i in 0..source.page_count() {
                    pages.push(source.page_metrics(i)?);
                }
                PageLayout::new(pages)
            }
            None => PageLayout::new(Vec::new()),
        };

        tracing::debug!(path = %path.display(), ?kind, pages = layout.page_count(), "Opened document");
        Ok(Self {
            path: path.to_path_buf(),
            kind,
            source,
            layout,
            zoom: ZoomState::new(),
            recognizer,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    // ── Zoom ──────────────────────────────────────────────────────────

    pub fn zoom_factor(&self) -> f32 {
        self.zoom.factor()
    }

    /// Set an absolute zoom factor; out-of-range values are clamped.
    pub fn set_zoom(&mut self, factor: f32) {
        self.zoom.set(factor);
    }

    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out();
    }

    // ── Rendering ─────────────────────────────────────────────────────

    /// Render one page at the current zoom factor.
    pub fn render_page(&self, index: usize) -> Result<DynamicImage, ViewerError> {
        let source = self.source.as_deref().ok_or(ViewerError::NotAvailable)?;
        source.render_page(index, self.zoom.factor())
    }

    /// The plain-text pane's content, for [`DocumentKind::PlainText`] only.
    pub fn page_text(&self, index: usize) -> Result<String, ViewerError> {
        let source = self.source.as_deref().ok_or(ViewerError::NotAvailable)?;
        source.page_text(index)
    }

    // ── Extraction ────────────────────────────────────────────────────

    /// Extract the text under a viewport-space selection rectangle.
    ///
    /// The rectangle is mapped per page (accounting for stacking offsets
    /// and zoom); each page region is asked for its native text layer
    /// first, then rasterized and OCR'd when the text layer yields
    /// nothing. A selection with no renderable content returns the empty
    /// string, never an error.
    pub fn select_region(&mut self, selection: RectF) -> Result<String, ViewerError> {
        let source = self.source.as_deref().ok_or(ViewerError::NotAvailable)?;
        let regions = self.layout.map_viewport_rect(selection, self.zoom.factor());

        let mut parts: Vec<String> = Vec::new();
        for region in regions {
            let text = source.text_in_rect(region.page_index, region.rect)?;
            if !text.trim().is_empty() {
                parts.push(text);
                continue;
            }

            // Text layer came back empty: rasterize just this region and
            // run it through the recognizer.
            let page_image = match source.render_page(region.page_index, OCR_RENDER_SCALE) {
                Ok(image) => image,
                // Non-rasterizing sources (plain text) simply have no
                // region text.
                Err(ViewerError::NotAvailable) => continue,
                Err(e) => return Err(e),
            };
            let crop = crop_region(&page_image, region.rect, OCR_RENDER_SCALE);
            if crop.width() == 0 || crop.height() == 0 {
                continue;
            }
            let recognized = self.recognizer.recognize(&crop)?;
            if !recognized.trim().is_empty() {
                parts.push(recognized);
            }
        }
        Ok(parts.join("\n"))
    }

    /// Extract the text of the whole document: the native text of every
    /// page, with whole-page OCR for pages that have none.
    pub fn copy_all(&mut self) -> Result<String, ViewerError> {
        let source = self.source.as_deref().ok_or(ViewerError::NotAvailable)?;

        let mut pages: Vec<String> = Vec::new();
        for index in 0..source.page_count() {
            let text = source.page_text(index)?;
            if !text.trim().is_empty() {
                pages.push(text);
                continue;
            }
            match source.render_page(index, OCR_RENDER_SCALE) {
                Ok(image) => {
                    let recognized = self.recognizer.recognize(&image)?;
                    if !recognized.trim().is_empty() {
                        pages.push(recognized);
                    }
                }
                Err(ViewerError::NotAvailable) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(pages.join("\n\n"))
    }
}

/// Crop a page bitmap (rendered at `scale`) down to a page-space region.
fn crop_region(page_image: &DynamicImage, rect: RectF, scale: f32) -> DynamicImage {
    let x = ((rect.x * scale).floor().max(0.0)) as u32;
    let y = ((rect.y * scale).floor().max(0.0)) as u32;
    let width = ((rect.width * scale).ceil() as u32).min(page_image.width().saturating_sub(x));
    let height = ((rect.height * scale).ceil() as u32).min(page_image.height().saturating_sub(y));
    page_image.crop_imm(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PAGE_GAP;
    use crate::ocr::NoopRecognizer;

    /// Two-page stub with a text layer on page 0 only; page 1 renders as a
    /// blank bitmap, standing in for a scanned page.
    struct StubSource;

    const PAGE: PageMetrics = PageMetrics { width: 600.0, height: 800.0 };

    impl PageSource for StubSource {
        fn page_count(&self) -> usize {
            2
        }

        fn page_metrics(&self, _index: usize) -> Result<PageMetrics, ViewerError> {
            Ok(PAGE)
        }

        fn render_page(&self, _index: usize, scale: f32) -> Result<DynamicImage, ViewerError> {
            let w = (PAGE.width * scale) as u32;
            let h = (PAGE.height * scale) as u32;
            Ok(DynamicImage::new_rgb8(w, h))
        }

        fn text_in_rect(&self, index: usize, rect: RectF) -> Result<String, ViewerError> {
            if index == 0 && rect.contains(100.0, 100.0) {
                Ok("WHEREAS the parties agree".to_string())
            } else {
                Ok(String::new())
            }
        }

        fn page_text(&self, index: usize) -> Result<String, ViewerError> {
            if index == 0 {
                Ok("Page one text".to_string())
            } else {
                Ok(String::new())
            }
        }

        fn has_text_layer(&self) -> bool {
            true
        }
    }

    /// Recognizer that always "reads" the same line, to observe fallback.
    struct FixedRecognizer(&'static str);

    impl TextRecognizer for FixedRecognizer {
        fn recognize(&mut self, _image: &DynamicImage) -> Result<String, ViewerError> {
            Ok(self.0.to_string())
        }
    }

    fn stub_view(recognizer: Box<dyn TextRecognizer>) -> DocumentView {
        DocumentView {
            path: PathBuf::from("stub.pdf"),
            kind: DocumentKind::Pdf,
            source: Some(Box::new(StubSource)),
            layout: PageLayout::new(vec![PAGE, PAGE]),
            zoom: ZoomState::new(),
            recognizer,
        }
    }

    #[test]
    fn select_region_uses_text_layer_when_present() {
        let mut view = stub_view(Box::new(FixedRecognizer("OCR SHOULD NOT RUN")));
        let text = view.select_region(RectF::new(50.0, 50.0, 200.0, 200.0)).unwrap();
        assert_eq!(text, "WHEREAS the parties agree");
    }

    #[test]
    fn select_region_falls_back_to_ocr_on_scanned_page() {
        let mut view = stub_view(Box::new(FixedRecognizer("recognized line")));
        // A rect entirely on page 1, which has no text layer.
        let page1_top = PAGE.height + PAGE_GAP;
        let text = view
            .select_region(RectF::new(10.0, page1_top + 10.0, 200.0, 100.0))
            .unwrap();
        assert_eq!(text, "recognized line");
    }

    #[test]
    fn empty_region_returns_empty_string_not_error() {
        let mut view = stub_view(Box::new(NoopRecognizer));
        // Selection inside the inter-page gap touches no page.
        let text = view
            .select_region(RectF::new(0.0, PAGE.height + 2.0, 50.0, PAGE_GAP - 4.0))
            .unwrap();
        assert_eq!(text, "");

        // Selection on the scanned page with a no-op recognizer also
        // degrades to empty, not an error.
        let page1_top = PAGE.height + PAGE_GAP;
        let text = view
            .select_region(RectF::new(10.0, page1_top + 10.0, 100.0, 50.0))
            .unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn selection_honors_zoom_factor() {
        let mut view = stub_view(Box::new(FixedRecognizer("unused")));
        view.set_zoom(2.0);
        // At 2x, page-space point (100, 100) sits at viewport (200, 200).
        let text = view.select_region(RectF::new(150.0, 150.0, 100.0, 100.0)).unwrap();
        assert_eq!(text, "WHEREAS the parties agree");
    }

    #[test]
    fn copy_all_concatenates_text_and_ocr_pages() {
        let mut view = stub_view(Box::new(FixedRecognizer("scanned page text")));
        let text = view.copy_all().unwrap();
        assert_eq!(text, "Page one text\n\nscanned page text");
    }

    #[test]
    fn external_documents_reject_page_operations() {
        let mut view = DocumentView {
            path: PathBuf::from("contract.docx"),
            kind: DocumentKind::External,
            source: None,
            layout: PageLayout::new(Vec::new()),
            zoom: ZoomState::new(),
            recognizer: Box::new(NoopRecognizer),
        };
        assert!(matches!(view.render_page(0), Err(ViewerError::NotAvailable)));
        assert!(matches!(
            view.select_region(RectF::new(0.0, 0.0, 10.0, 10.0)),
            Err(ViewerError::NotAvailable)
        ));
    }
}
