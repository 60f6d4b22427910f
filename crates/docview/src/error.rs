/// Errors surfaced by the viewer. The widget layer renders these as error
/// dialogs; none of them are recoverable beyond retrying the action.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file format: .{0}")]
    UnsupportedFormat(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("OCR error: {0}")]
    Ocr(String),

    /// The operation does not apply to the loaded document kind, e.g.
    /// rendering a plain-text file to a bitmap.
    #[error("Operation not available for this document kind")]
    NotAvailable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
