//! OCR fallback seam.
//!
//! Region extraction first asks the page's native text layer; when that
//! comes back empty (scanned content), the rasterized region goes through
//! a [`TextRecognizer`]. The production engine is PP-OCR via `oar-ocr`,
//! compiled behind the `ocr` feature because its ONNX models are a
//! separate download; without it the viewer degrades to text-layer-only
//! extraction.

use image::DynamicImage;

use crate::error::ViewerError;

/// Turns a raster region into text.
pub trait TextRecognizer {
    fn recognize(&mut self, image: &DynamicImage) -> Result<String, ViewerError>;
}

/// Recognizer used when no OCR engine is configured: always returns the
/// empty string, so region selection on scanned content degrades to "no
/// text here" rather than an error.
pub struct NoopRecognizer;

impl TextRecognizer for NoopRecognizer {
    fn recognize(&mut self, _image: &DynamicImage) -> Result<String, ViewerError> {
        tracing::debug!("No OCR engine configured; returning empty text");
        Ok(String::new())
    }
}

#[cfg(feature = "ocr")]
pub use self::oar::{OarRecognizer, OcrModelPaths};

#[cfg(feature = "ocr")]
mod oar {
    use std::path::{Path, PathBuf};

    use image::DynamicImage;
    use oar_ocr::pipeline::{OAROCRBuilder, OAROCR};

    use super::TextRecognizer;
    use crate::error::ViewerError;

    /// Only recognitions at or above this confidence make it into the
    /// extracted text.
    const MIN_CONFIDENCE: f32 = 0.3;

    /// PP-OCR model locations.
    #[derive(Debug, Clone)]
    pub struct OcrModelPaths {
        pub detection_model: PathBuf,
        pub recognition_model: PathBuf,
        pub character_keys: PathBuf,
    }

    /// PP-OCR detection + recognition pipeline.
    pub struct OarRecognizer {
        ocr: OAROCR,
    }

    impl OarRecognizer {
        pub fn new(paths: &OcrModelPaths) -> Result<Self, ViewerError> {
            for model in [
                &paths.detection_model,
                &paths.recognition_model,
                &paths.character_keys,
            ] {
                if !model.is_file() {
                    return Err(ViewerError::Ocr(format!(
                        "OCR model file missing: {}",
                        model.display()
                    )));
                }
            }

            let ocr = OAROCRBuilder::new(
                paths.detection_model.display().to_string(),
                paths.recognition_model.display().to_string(),
                paths.character_keys.display().to_string(),
            )
            .text_detection_batch_size(1)
            .text_recognition_batch_size(6)
            .text_rec_score_thresh(MIN_CONFIDENCE)
            .build()
            .map_err(|e| ViewerError::Ocr(e.to_string()))?;

            Ok(Self { ocr })
        }

        fn predict(&mut self, path: &Path) -> Result<String, ViewerError> {
            let result = self
                .ocr
                .predict(path)
                .map_err(|e| ViewerError::Ocr(e.to_string()))?;

            let mut lines = Vec::new();
            for (text, score) in result.rec_texts.iter().zip(result.rec_scores.iter()) {
                if *score >= MIN_CONFIDENCE {
                    lines.push(text.to_string());
                }
            }
            Ok(lines.join("\n"))
        }
    }

    impl TextRecognizer for OarRecognizer {
        fn recognize(&mut self, image: &DynamicImage) -> Result<String, ViewerError> {
            // The pipeline reads from disk; hand it the region via a temp
            // file.
            let file = tempfile::Builder::new()
                .suffix(".png")
                .tempfile()
                .map_err(ViewerError::Io)?;
            image
                .save_with_format(file.path(), image::ImageFormat::Png)
                .map_err(ViewerError::Image)?;
            self.predict(file.path())
        }
    }
}
