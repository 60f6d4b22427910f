//! File-kind detection by extension.

use std::path::Path;

use crate::error::ViewerError;

/// Raster formats the image source can decode.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "gif", "webp"];

/// Formats shown in the plain-text pane.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "log", "csv"];

/// Office formats handed to the platform's default application instead of
/// being rendered in-process.
const EXTERNAL_EXTENSIONS: &[&str] = &[
    "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods", "odp", "rtf",
];

/// What the viewer will do with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Rendered page-by-page through pdfium, with a native text layer.
    Pdf,
    /// Decoded as a single-page raster; text only via OCR.
    Image,
    /// Shown in a text pane; never rasterized.
    PlainText,
    /// Opened with the platform's default application.
    External,
}

impl DocumentKind {
    /// Detect the kind of `path` from its extension.
    ///
    /// Fails with [`ViewerError::FileNotFound`] when the path does not
    /// exist and [`ViewerError::UnsupportedFormat`] for unknown extensions.
    pub fn detect(path: &Path) -> Result<Self, ViewerError> {
        if !path.exists() {
            return Err(ViewerError::FileNotFound(path.display().to_string()));
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if ext == "pdf" {
            Ok(Self::Pdf)
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Image)
        } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::PlainText)
        } else if EXTERNAL_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::External)
        } else {
            Err(ViewerError::UnsupportedFormat(ext))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn detects_each_kind() {
        let dir = std::env::temp_dir().join("causa-kind-test");
        std::fs::create_dir_all(&dir).unwrap();

        assert_eq!(DocumentKind::detect(&touch(&dir, "a.pdf")).unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::detect(&touch(&dir, "b.PNG")).unwrap(), DocumentKind::Image);
        assert_eq!(DocumentKind::detect(&touch(&dir, "c.txt")).unwrap(), DocumentKind::PlainText);
        assert_eq!(DocumentKind::detect(&touch(&dir, "d.docx")).unwrap(), DocumentKind::External);
    }

    #[test]
    fn missing_path_is_file_not_found() {
        let err = DocumentKind::detect(Path::new("/nonexistent/claim.pdf")).unwrap_err();
        assert!(matches!(err, ViewerError::FileNotFound(_)));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let dir = std::env::temp_dir().join("causa-kind-test");
        std::fs::create_dir_all(&dir).unwrap();
        let err = DocumentKind::detect(&touch(&dir, "e.xyz")).unwrap_err();
        assert!(matches!(err, ViewerError::UnsupportedFormat(ext) if ext == "xyz"));
    }
}
