//! # OCR Notes
//!
//! Pick images with the native file dialog, run Tesseract on each of them and
//! append the recognized text to a numbered notes file (`1.txt`, `2.txt`, ...)
//! in the working directory.
//!
//! ## Pipeline
//!
//! - **File selection**: a modal multi-file dialog ([`selector`])
//! - **Preprocessing**: grayscale, adaptive Gaussian threshold, 5×5 blur
//!   ([`processors`])
//! - **Recognition**: Tesseract with PSM 6 and a 300 DPI hint ([`predictor`])
//! - **Output**: one `<n>.txt` per run, one block per image ([`pipeline`])
//!
//! Images are processed one after another in selection order. A broken image
//! is logged and skipped; the rest of the batch continues.
//!
//! ## Modules
//!
//! * [`core`] - Configuration, errors and the selector/recognizer traits
//! * [`pipeline`] - Batch runner, output naming and run reports
//! * [`processors`] - Thresholding and blur
//! * [`predictor`] - Tesseract recognizer (feature `tesseract`)
//! * [`selector`] - Native file dialog (feature `dialog`)
//! * [`utils`] - Image loading and tracing setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ocr_notes::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut runner = BatchRunner::new(
//!     NativeFileSelector::new(),
//!     TesseractRecognizer::new(),
//!     std::env::current_dir()?,
//! );
//! let report = runner.run()?;
//! println!("{}", report.stats());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod pipeline;
pub mod predictor;
pub mod processors;
#[cfg(feature = "dialog")]
pub mod selector;
pub mod utils;

/// Prelude module for convenient imports.
///
/// ```rust
/// use ocr_notes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{
        FileSelector, OCRError, OcrResult, PreprocessConfig, RecognitionConfig, TextRecognizer,
    };
    pub use crate::pipeline::{BatchRunner, BatchStats, ImageOutcome, RunReport};
    #[cfg(feature = "tesseract")]
    pub use crate::predictor::TesseractRecognizer;
    pub use crate::processors::ImagePreprocessor;
    #[cfg(feature = "dialog")]
    pub use crate::selector::NativeFileSelector;
    pub use crate::utils::init_tracing;
}
