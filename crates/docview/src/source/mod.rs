//! Page sources: the per-format backends behind the viewer.

pub mod image;
pub mod pdf;
pub mod text;

use ::image::DynamicImage;

use crate::error::ViewerError;
use crate::geometry::{PageMetrics, RectF};

pub use self::image::ImageSource;
pub use self::pdf::PdfSource;
pub use self::text::TextSource;

/// A loaded document that can report page sizes, render pages to bitmaps,
/// and extract text.
///
/// Rectangles are page-local document points with a top-left origin; each
/// backend converts to its own native space internally.
pub trait PageSource {
    fn page_count(&self) -> usize;

    fn page_metrics(&self, index: usize) -> Result<PageMetrics, ViewerError>;

    /// Render one page at `scale` (1.0 = 72 dpi).
    fn render_page(&self, index: usize, scale: f32) -> Result<DynamicImage, ViewerError>;

    /// Text from the native text layer inside `rect`, or the empty string
    /// when the backend has no text layer or the region holds none.
    fn text_in_rect(&self, index: usize, rect: RectF) -> Result<String, ViewerError>;

    /// The whole page's native text, empty when there is none.
    fn page_text(&self, index: usize) -> Result<String, ViewerError>;

    /// Whether this backend carries a native text layer at all. When
    /// `false`, extraction goes straight to OCR.
    fn has_text_layer(&self) -> bool;
}
