//! Adaptive thresholding and Gaussian smoothing on grayscale images.
//!
//! Both operations are separable Gaussian convolutions run through
//! `imageproc::filter::separable_filter_equal`, which replicates edge pixels
//! at the borders.

use image::{GrayImage, Luma};
use imageproc::filter::separable_filter_equal;

/// Foreground value of a thresholded pixel.
pub const WHITE: u8 = 255;

/// Background value of a thresholded pixel.
pub const BLACK: u8 = 0;

/// Derives a Gaussian sigma from an odd kernel size.
///
/// Uses `0.3 * ((size - 1) * 0.5 - 1) + 0.8`, which gives 2.0 for an 11-tap
/// kernel and 1.1 for a 5-tap kernel.
pub fn sigma_for_kernel_size(size: u32) -> f32 {
    0.3 * ((size.saturating_sub(1)) as f32 * 0.5 - 1.0) + 0.8
}

/// Builds a normalized 1-D Gaussian kernel of `size` taps.
///
/// A non-positive `sigma` is derived from `size` with [`sigma_for_kernel_size`].
/// The weights sum to 1.
pub fn gaussian_kernel(size: u32, sigma: f32) -> Vec<f32> {
    let size = size.max(1);
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        sigma_for_kernel_size(size)
    };
    let center = (size / 2) as f32;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (0..size)
        .map(|i| {
            let x = i as f32 - center;
            (-(x * x) / denom).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for weight in kernel.iter_mut() {
        *weight /= sum;
    }
    kernel
}

/// Binarizes `gray` against a Gaussian-weighted local mean.
///
/// A pixel becomes [`WHITE`] when its value is greater than the weighted mean
/// of its `block_size × block_size` neighbourhood minus `offset`, and
/// [`BLACK`] otherwise. The filtered mean is truncated to an integer; with
/// integer pixels and offset, `src > trunc(mean) - offset` classifies the same
/// as `src > mean - offset`.
pub fn adaptive_threshold_gaussian(gray: &GrayImage, block_size: u32, offset: i32) -> GrayImage {
    let kernel = gaussian_kernel(block_size, 0.0);
    let local_mean = separable_filter_equal(gray, &kernel);

    let (width, height) = gray.dimensions();
    let mut out = GrayImage::new(width, height);
    for ((src, mean), dst) in gray
        .pixels()
        .zip(local_mean.pixels())
        .zip(out.pixels_mut())
    {
        let value = if i32::from(src.0[0]) > i32::from(mean.0[0]) - offset {
            WHITE
        } else {
            BLACK
        };
        *dst = Luma([value]);
    }
    out
}

/// Smooths `gray` with a square Gaussian kernel of `kernel_size` taps.
pub fn gaussian_blur(gray: &GrayImage, kernel_size: u32) -> GrayImage {
    if kernel_size <= 1 {
        return gray.clone();
    }
    let kernel = gaussian_kernel(kernel_size, 0.0);
    separable_filter_equal(gray, &kernel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigma_for_common_sizes() {
        assert!((sigma_for_kernel_size(11) - 2.0).abs() < 1e-6);
        assert!((sigma_for_kernel_size(5) - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_kernel_is_normalized_and_symmetric() {
        let kernel = gaussian_kernel(11, 0.0);
        assert_eq!(kernel.len(), 11);
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        for i in 0..5 {
            assert!((kernel[i] - kernel[10 - i]).abs() < 1e-6);
            assert!(kernel[i] < kernel[i + 1]);
        }
    }

    #[test]
    fn test_uniform_image_thresholds_to_white() {
        let gray = GrayImage::from_pixel(20, 20, Luma([128]));
        let binary = adaptive_threshold_gaussian(&gray, 11, 2);
        assert!(binary.pixels().all(|p| p.0[0] == WHITE));
    }

    #[test]
    fn test_thin_dark_line_stays_black() {
        let mut gray = GrayImage::from_pixel(30, 30, Luma([255]));
        for y in 0..30 {
            gray.put_pixel(15, y, Luma([0]));
        }

        let binary = adaptive_threshold_gaussian(&gray, 11, 2);
        for y in 0..30 {
            assert_eq!(binary.get_pixel(15, y).0[0], BLACK);
            assert_eq!(binary.get_pixel(14, y).0[0], WHITE);
            assert_eq!(binary.get_pixel(16, y).0[0], WHITE);
            assert_eq!(binary.get_pixel(2, y).0[0], WHITE);
        }
    }

    #[test]
    fn test_threshold_output_is_binary() {
        let gray = GrayImage::from_fn(25, 17, |x, y| Luma([((x * 13 + y * 7) % 256) as u8]));
        let binary = adaptive_threshold_gaussian(&gray, 11, 2);
        assert_eq!(binary.dimensions(), (25, 17));
        assert!(binary.pixels().all(|p| p.0[0] == WHITE || p.0[0] == BLACK));
    }

    #[test]
    fn test_blur_softens_isolated_pixel() {
        let mut gray = GrayImage::from_pixel(9, 9, Luma([255]));
        gray.put_pixel(4, 4, Luma([0]));

        let blurred = gaussian_blur(&gray, 5);
        assert_eq!(blurred.dimensions(), (9, 9));
        let center = blurred.get_pixel(4, 4).0[0];
        assert!(center > 0 && center < 255);
        // Untouched by the kernel, up to float truncation.
        assert!(blurred.get_pixel(0, 0).0[0] >= 254);
    }

    #[test]
    fn test_blur_with_unit_kernel_is_identity() {
        let gray = GrayImage::from_fn(4, 4, |x, y| Luma([(x * 40 + y) as u8]));
        assert_eq!(gaussian_blur(&gray, 1), gray);
    }
}
