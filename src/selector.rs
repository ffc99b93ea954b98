//! Native multi-file open dialog.

use crate::core::{DIALOG_TITLE, FileSelector, OcrResult};
use std::path::PathBuf;
use tracing::info;

/// A [`FileSelector`] showing the platform's modal "open files" dialog.
///
/// The dialog offers a single "All Files" filter and starts in `start_dir`
/// when one is set. It blocks until the user confirms or cancels; cancelling
/// yields an empty selection.
#[derive(Debug, Clone, Default)]
pub struct NativeFileSelector {
    start_dir: Option<PathBuf>,
}

impl NativeFileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog in `dir`.
    pub fn with_start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }
}

impl FileSelector for NativeFileSelector {
    fn select_files(&mut self) -> OcrResult<Vec<PathBuf>> {
        ensure_display()?;

        let mut dialog = rfd::FileDialog::new()
            .set_title(DIALOG_TITLE)
            .add_filter("All Files", &["*"]);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        let paths = dialog.pick_files().unwrap_or_default();
        if paths.is_empty() {
            info!("No files selected.");
        } else {
            info!("Files selected: {:?}", paths);
        }
        Ok(paths)
    }
}

/// Fails early when there is no display server to host the dialog.
#[cfg(all(unix, not(target_os = "macos")))]
fn ensure_display() -> OcrResult<()> {
    let has_display = ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|value| !value.is_empty()));
    if has_display {
        Ok(())
    } else {
        Err(crate::core::OCRError::dialog(
            "no display available (neither DISPLAY nor WAYLAND_DISPLAY is set)",
        ))
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn ensure_display() -> OcrResult<()> {
    Ok(())
}
