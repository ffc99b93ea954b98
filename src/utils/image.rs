//! Utility functions for loading images.
//!
//! The `image` crate picks a decoder from the file extension, which fails for
//! files whose bytes do not match their name (JPEG data saved as `.png`). The
//! loaders here retry such failures once with content sniffing.

use crate::core::{OCRError, OcrResult};
use image::{DynamicImage, GrayImage, ImageError, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Converts a DynamicImage to a GrayImage (8-bit luminance).
pub fn dynamic_to_gray(img: DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Loads an image from a file path.
///
/// # Arguments
///
/// * `path` - The path of the image file to load
///
/// # Errors
///
/// Returns `OCRError::ImageLoad` carrying `path` if the file is missing,
/// unreadable, in an unsupported format or corrupt.
pub fn load_image(path: &Path) -> OcrResult<DynamicImage> {
    load_dynamic_image(path).map_err(|err| OCRError::image_load(path, err))
}

/// Loads an image from a file path and converts it to single-channel luminance.
pub fn load_gray_image(path: &Path) -> OcrResult<GrayImage> {
    load_image(path).map(dynamic_to_gray)
}

fn load_dynamic_image(path: &Path) -> Result<DynamicImage, ImageError> {
    match image::open(path) {
        Ok(img) => Ok(img),
        Err(err) if should_retry(&err) => {
            tracing::debug!(
                "Standard decode failed for {} ({err}). Retrying with format sniffing.",
                path.display()
            );
            decode_with_guessed_format(path)
        }
        Err(err) => Err(err),
    }
}

fn should_retry(err: &ImageError) -> bool {
    matches!(err, ImageError::Decoding(_) | ImageError::Unsupported(_))
}

fn decode_with_guessed_format(path: &Path) -> Result<DynamicImage, ImageError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let reader = ImageReader::new(reader).with_guessed_format()?;
    reader.decode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn test_load_gray_image_keeps_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("color.png");
        RgbImage::from_pixel(7, 4, Rgb([200, 10, 30])).save(&path).unwrap();

        let gray = load_gray_image(&path).unwrap();
        assert_eq!(gray.dimensions(), (7, 4));
    }

    #[test]
    fn test_load_mislabelled_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("actually_bmp.png");
        RgbImage::from_pixel(3, 2, Rgb([90, 90, 90]))
            .save_with_format(&path, ImageFormat::Bmp)
            .unwrap();

        let gray = load_gray_image(&path).unwrap();
        assert_eq!(gray.dimensions(), (3, 2));
    }

    #[test]
    fn test_load_missing_image_reports_path() {
        let path = Path::new("/nonexistent/path/scan.png");
        let err = load_image(path).unwrap_err();
        match err {
            OCRError::ImageLoad { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_corrupt_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        assert!(matches!(
            load_image(&path),
            Err(OCRError::ImageLoad { .. })
        ));
    }
}
