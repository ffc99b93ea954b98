//! The core module of the crate.
//!
//! This module contains the pieces every other module builds on:
//! - Configuration structures and validation
//! - Constants used throughout the batch
//! - Error handling
//! - Traits for the file selector and the OCR engine

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;

pub use config::{ConfigError, ConfigValidator, PreprocessConfig, RecognitionConfig};
pub use constants::*;
pub use errors::{BoxError, OCRError, OcrResult};
pub use traits::{FileSelector, TextRecognizer};
