//! The batch runner: select, name, then process each image in turn.
//!
//! A run moves through `SelectingFiles -> NamingOutput -> ProcessingImages ->
//! Done`, exiting right after selection when nothing was chosen. Selection and
//! naming failures end the run with an error. Failures of a single image are
//! logged and recorded in the [`RunReport`], and the batch moves on to the
//! next path; nothing is written for that image.

use super::output::{ResultWriter, next_output_path};
use super::stats::{ImageOutcome, RunReport};
use crate::core::{
    ConfigValidator, FileSelector, OCRError, OcrResult, PreprocessConfig, RecognitionConfig,
    TextRecognizer,
};
use crate::processors::ImagePreprocessor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Runs one OCR batch over the files returned by a [`FileSelector`].
pub struct BatchRunner<S, R> {
    selector: S,
    recognizer: R,
    preprocessor: ImagePreprocessor,
    recognition: RecognitionConfig,
    output_dir: PathBuf,
}

impl<S: FileSelector, R: TextRecognizer> BatchRunner<S, R> {
    /// Creates a runner writing into `output_dir` with default settings.
    pub fn new(selector: S, recognizer: R, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            selector,
            recognizer,
            preprocessor: ImagePreprocessor::default(),
            recognition: RecognitionConfig::default(),
            output_dir: output_dir.into(),
        }
    }

    /// Replaces the preprocessing configuration.
    pub fn with_preprocess_config(mut self, config: PreprocessConfig) -> Self {
        self.preprocessor = ImagePreprocessor::new(config);
        self
    }

    /// Replaces the recognition configuration.
    pub fn with_recognition_config(mut self, config: RecognitionConfig) -> Self {
        self.recognition = config;
        self
    }

    /// Runs the batch.
    ///
    /// # Returns
    ///
    /// A report with the shared output path and one outcome per selected
    /// image. An empty selection returns a report without output path and no
    /// file is created.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration is invalid, the selector fails, or
    /// the output directory cannot be created or listed. Per-image failures
    /// never surface here.
    pub fn run(&mut self) -> OcrResult<RunReport> {
        self.preprocessor.config().validate()?;
        self.recognition.validate()?;

        let paths = self.selector.select_files()?;
        if paths.is_empty() {
            info!("No files selected. Exiting program.");
            return Ok(RunReport::no_selection());
        }

        fs::create_dir_all(&self.output_dir)
            .map_err(|err| OCRError::filesystem(&self.output_dir, err))?;
        let output_path = next_output_path(&self.output_dir)?;
        info!("Writing OCR results to {}", output_path.display());
        debug!("Recognition settings: {}", self.recognition.config_string());

        let writer = ResultWriter::new(&output_path);
        let mut outcomes = Vec::with_capacity(paths.len());
        for path in paths {
            let outcome = self.process_one(&path, &writer);
            outcomes.push((path, outcome));
        }

        let report = RunReport {
            output_path: Some(output_path),
            outcomes,
        };
        info!(
            "All OCR results have been written to {}",
            writer.path().display()
        );
        info!("{}", report.stats());
        Ok(report)
    }

    fn process_one(&mut self, path: &Path, writer: &ResultWriter) -> ImageOutcome {
        let text = match self.recognize_image(path) {
            Ok(text) => text,
            Err(err) => {
                error!("Error processing {}: {}", path.display(), err.chain());
                return ImageOutcome::Failed(err);
            }
        };

        match writer.append(&text) {
            Ok(()) => ImageOutcome::Written {
                chars: text.chars().count(),
            },
            Err(err) => {
                error!(
                    "Error writing OCR result of {}: {}",
                    path.display(),
                    err.chain()
                );
                ImageOutcome::WriteFailed(err)
            }
        }
    }

    /// Preprocesses and recognizes one image.
    pub fn recognize_image(&mut self, path: &Path) -> OcrResult<String> {
        let bitmap = self.preprocessor.preprocess(path)?;
        self.recognizer
            .recognize(&bitmap, &self.recognition)
            .map_err(|err| OCRError::recognition(path, err))
    }
}
