//! OCR engine implementations of [`TextRecognizer`](crate::core::TextRecognizer).

#[cfg(feature = "tesseract")]
pub mod tesseract;

#[cfg(feature = "tesseract")]
pub use tesseract::TesseractRecognizer;
