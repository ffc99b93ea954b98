//! Image processing applied before recognition.
//!
//! * [`threshold`] - Gaussian kernels, adaptive thresholding and blur
//! * [`preprocess`] - The load, threshold and blur pipeline for one image

pub mod preprocess;
pub mod threshold;

pub use preprocess::ImagePreprocessor;
pub use threshold::{adaptive_threshold_gaussian, gaussian_blur, gaussian_kernel};
