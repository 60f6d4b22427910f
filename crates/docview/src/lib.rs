//! Document viewer core.
//!
//! Everything beneath the viewer widget: file-kind dispatch, page sources
//! (PDF via pdfium, images, plain text), stacked-page layout and zoom
//! geometry, rubber-band region selection with text-layer extraction and
//! OCR fallback, and whole-document text extraction. Bitmaps come back as
//! [`image::DynamicImage`]; presenting them is the widget's job.

pub mod error;
pub mod geometry;
pub mod kind;
pub mod ocr;
pub mod source;
pub mod viewer;

pub use error::ViewerError;
pub use geometry::{PageLayout, PageMetrics, PageRegion, RectF, ZoomState};
pub use kind::DocumentKind;
pub use ocr::{NoopRecognizer, TextRecognizer};
pub use viewer::DocumentView;
