//! Image cleanup applied before recognition.

use super::threshold::{adaptive_threshold_gaussian, gaussian_blur};
use crate::core::{OcrResult, PreprocessConfig};
use crate::utils::load_gray_image;
use image::GrayImage;
use std::path::Path;
use tracing::debug;

/// Loads an image and turns it into a cleaned single-channel bitmap.
///
/// The steps are luminance conversion, adaptive thresholding against a
/// Gaussian-weighted local mean (to cope with uneven lighting across a
/// photographed page) and a small Gaussian blur that removes isolated pixels
/// left by the threshold.
#[derive(Debug, Clone, Default)]
pub struct ImagePreprocessor {
    config: PreprocessConfig,
}

impl ImagePreprocessor {
    /// Creates a preprocessor with the given configuration.
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    /// Loads the image at `path` and preprocesses it.
    ///
    /// # Errors
    ///
    /// Returns `OCRError::ImageLoad` carrying `path` if the image cannot be
    /// decoded.
    pub fn preprocess(&self, path: &Path) -> OcrResult<GrayImage> {
        let gray = load_gray_image(path)?;
        debug!(
            "Loaded {} ({}x{})",
            path.display(),
            gray.width(),
            gray.height()
        );
        Ok(self.preprocess_gray(&gray))
    }

    /// Runs thresholding and blur on an already decoded grayscale image.
    ///
    /// The result has the same dimensions as `gray`.
    pub fn preprocess_gray(&self, gray: &GrayImage) -> GrayImage {
        let binary = adaptive_threshold_gaussian(gray, self.config.block_size, self.config.offset);
        gaussian_blur(&binary, self.config.blur_kernel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OCRError;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn test_preprocess_keeps_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.png");
        let page = RgbImage::from_fn(64, 48, |x, y| {
            if (x / 4 + y / 6) % 3 == 0 {
                Rgb([20, 20, 20])
            } else {
                Rgb([230, 225, 210])
            }
        });
        page.save(&path).unwrap();

        let bitmap = ImagePreprocessor::default().preprocess(&path).unwrap();
        assert_eq!(bitmap.dimensions(), (64, 48));
        // GrayImage carries exactly one channel per pixel.
        assert_eq!(bitmap.as_raw().len(), 64 * 48);
    }

    #[test]
    fn test_preprocess_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = ImagePreprocessor::default().preprocess(&path).unwrap_err();
        assert!(matches!(err, OCRError::ImageLoad { .. }));
        assert_eq!(err.image_path(), Some(path.as_path()));
    }

    #[test]
    fn test_preprocess_gray_blank_page_is_white() {
        let gray = GrayImage::from_pixel(32, 32, image::Luma([240]));
        let bitmap = ImagePreprocessor::default().preprocess_gray(&gray);
        assert!(bitmap.pixels().all(|p| p.0[0] >= 254));
    }
}
