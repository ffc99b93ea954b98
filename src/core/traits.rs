//! Trait definitions for the external collaborators of a batch.
//!
//! The native file dialog and the OCR engine are modelled as traits so the
//! batch runner can be driven headlessly, with the real implementations
//! living in [`crate::selector`] and [`crate::predictor`].

use super::config::RecognitionConfig;
use super::errors::{BoxError, OcrResult};
use image::GrayImage;
use std::path::PathBuf;

/// Source of the image paths to process.
pub trait FileSelector {
    /// Asks for the images to process.
    ///
    /// # Returns
    ///
    /// The chosen paths in the order the selector reports them. An empty
    /// vector means the user cancelled and is not an error.
    ///
    /// # Errors
    ///
    /// Returns `OCRError::Dialog` when the selector cannot be shown at all.
    fn select_files(&mut self) -> OcrResult<Vec<PathBuf>>;
}

/// An OCR engine turning a cleaned bitmap into text.
pub trait TextRecognizer {
    /// Recognizes the text in `bitmap`.
    ///
    /// # Arguments
    ///
    /// * `bitmap` - Single-channel image produced by the preprocessor.
    /// * `config` - Language, page segmentation and resolution settings.
    ///
    /// # Returns
    ///
    /// The recognized text. An image without readable text yields an empty or
    /// whitespace-only string, which is not an error.
    fn recognize(
        &mut self,
        bitmap: &GrayImage,
        config: &RecognitionConfig,
    ) -> Result<String, BoxError>;
}

impl<T: FileSelector + ?Sized> FileSelector for Box<T> {
    fn select_files(&mut self) -> OcrResult<Vec<PathBuf>> {
        (**self).select_files()
    }
}

impl<T: TextRecognizer + ?Sized> TextRecognizer for Box<T> {
    fn recognize(
        &mut self,
        bitmap: &GrayImage,
        config: &RecognitionConfig,
    ) -> Result<String, BoxError> {
        (**self).recognize(bitmap, config)
    }
}
