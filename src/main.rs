//! OCR Notes
//!
//! Opens a file dialog, recognizes the text of every selected image and
//! appends it to the next free `<n>.txt` in the current directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release
//! RUST_LOG=debug cargo run --release
//! ```

use clap::Parser;
use ocr_notes::prelude::*;
use std::process::ExitCode;
use tracing::error;

/// Command-line interface. The program takes no options besides the ones
/// clap provides (`--help`, `--version`); all input comes from the dialog.
#[derive(Parser)]
#[command(name = "ocr-notes", version)]
#[command(about = "Recognize text in selected images and append it to a numbered text file")]
struct Args {}

#[cfg(all(feature = "dialog", feature = "tesseract"))]
fn run() -> Result<RunReport, OCRError> {
    let output_dir = std::env::current_dir()
        .map_err(|err| OCRError::filesystem(".", err))?;

    let mut runner = BatchRunner::new(
        NativeFileSelector::new().with_start_dir(&output_dir),
        TesseractRecognizer::new(),
        output_dir,
    );
    runner.run()
}

#[cfg(not(all(feature = "dialog", feature = "tesseract")))]
fn run() -> Result<RunReport, OCRError> {
    Err(OCRError::config_error(
        "built without the `dialog` and `tesseract` features",
    ))
}

fn main() -> ExitCode {
    let _args = Args::parse();
    init_tracing();

    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Unexpected error: {}", err.chain());
            ExitCode::FAILURE
        }
    }
}
