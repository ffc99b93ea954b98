//! Per-run results and summary statistics.
//!
//! A run records one [`ImageOutcome`] per selected path, in processing order,
//! so callers and tests can inspect exactly what happened to each image.

use crate::core::OCRError;
use std::fmt;
use std::path::{Path, PathBuf};

/// What happened to one selected image.
#[derive(Debug)]
pub enum ImageOutcome {
    /// Text was recognized and appended to the output file.
    Written {
        /// Number of characters recognized (possibly 0).
        chars: usize,
    },
    /// Loading, preprocessing or recognition failed; nothing was written.
    Failed(OCRError),
    /// Text was recognized but appending it to the output file failed.
    WriteFailed(OCRError),
}

impl ImageOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    /// Returns the error for unsuccessful outcomes.
    pub fn error(&self) -> Option<&OCRError> {
        match self {
            Self::Written { .. } => None,
            Self::Failed(err) | Self::WriteFailed(err) => Some(err),
        }
    }
}

/// The result of one batch run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// The shared output file. `None` when no files were selected.
    pub output_path: Option<PathBuf>,
    /// One entry per selected image, in processing order.
    pub outcomes: Vec<(PathBuf, ImageOutcome)>,
}

impl RunReport {
    /// A report for a run where the user selected nothing.
    pub fn no_selection() -> Self {
        Self::default()
    }

    /// Returns `true` when the selection was empty.
    pub fn is_empty_selection(&self) -> bool {
        self.output_path.is_none() && self.outcomes.is_empty()
    }

    /// Paths whose text was written, in order.
    pub fn written_paths(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_written())
            .map(|(path, _)| path.as_path())
    }

    /// Computes summary statistics.
    pub fn stats(&self) -> BatchStats {
        let mut stats = BatchStats::new();
        for (_, outcome) in &self.outcomes {
            stats.total_processed += 1;
            match outcome {
                ImageOutcome::Written { .. } => stats.written += 1,
                ImageOutcome::Failed(_) => stats.failed += 1,
                ImageOutcome::WriteFailed(_) => stats.write_failed += 1,
            }
        }
        stats
    }
}

/// Counts of how a batch went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchStats {
    /// The total number of images processed.
    pub total_processed: usize,
    /// Images whose text was appended to the output file.
    pub written: usize,
    /// Images that failed to load or be recognized.
    pub failed: usize,
    /// Images whose text could not be written.
    pub write_failed: usize,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the success rate as a percentage (0.0 to 100.0).
    pub fn success_rate(&self) -> f64 {
        if self.total_processed == 0 {
            0.0
        } else {
            (self.written as f64 / self.total_processed as f64) * 100.0
        }
    }
}

impl fmt::Display for BatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} images written ({:.1}%), {} failed",
            self.written,
            self.total_processed,
            self.success_rate(),
            self.failed
        )?;
        if self.write_failed > 0 {
            write!(f, ", {} not saved", self.write_failed)?;
        }
        Ok(())
    }
}
