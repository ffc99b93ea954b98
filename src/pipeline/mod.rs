//! The batch pipeline.
//!
//! * [`runner`] - Selection, naming and the per-image loop
//! * [`output`] - Numbered output files and block appending
//! * [`stats`] - Per-image outcomes and run summaries

pub mod output;
pub mod runner;
pub mod stats;

pub use output::{ResultWriter, next_output_path};
pub use runner::BatchRunner;
pub use stats::{BatchStats, ImageOutcome, RunReport};
