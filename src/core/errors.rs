//! Error types for the OCR batch.
//!
//! This module defines the errors that can occur while selecting images,
//! loading and preprocessing them, running recognition and writing results.
//! Errors local to one image are caught by the batch runner and logged; the
//! remaining kinds end the run.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed error returned by external engines.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Enum representing the errors that can occur in the OCR batch.
///
/// `ImageLoad` and `Recognition` are per-image failures, `Filesystem` covers
/// the directory listing and output writes, and `Dialog` is raised when the
/// file picker itself cannot be shown.
#[derive(Error, Debug)]
pub enum OCRError {
    /// The image could not be decoded (missing, unreadable, unsupported or corrupt).
    #[error("failed to load image {}", path.display())]
    ImageLoad {
        /// The image that failed to load.
        path: PathBuf,
        /// The underlying decode error.
        #[source]
        source: image::ImageError,
    },

    /// The OCR engine failed on a preprocessed image.
    #[error("recognition failed for {}", path.display())]
    Recognition {
        /// The source image of the bitmap.
        path: PathBuf,
        /// The engine error.
        #[source]
        source: BoxError,
    },

    /// Listing the output directory or writing the output file failed.
    #[error("filesystem error at {}", path.display())]
    Filesystem {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file picker could not be opened.
    #[error("file dialog: {message}")]
    Dialog {
        /// A message describing the failure.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },
}

impl OCRError {
    /// Creates an `ImageLoad` error for `path`.
    pub fn image_load(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::ImageLoad {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a `Recognition` error for the image at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - The source image the bitmap was derived from.
    /// * `source` - The error reported by the engine.
    pub fn recognition(path: impl AsRef<Path>, source: impl Into<BoxError>) -> Self {
        Self::Recognition {
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }

    /// Creates a `Filesystem` error for `path`.
    pub fn filesystem(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a `Dialog` error.
    pub fn dialog(message: impl Into<String>) -> Self {
        Self::Dialog {
            message: message.into(),
        }
    }

    /// Creates a `ConfigError`.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Returns the image path for errors that belong to a single image.
    pub fn image_path(&self) -> Option<&Path> {
        match self {
            Self::ImageLoad { path, .. } | Self::Recognition { path, .. } => {
                Some(path.as_path())
            }
            _ => None,
        }
    }

    /// Renders the error together with its chain of sources on one line.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = std::error::Error::source(err);
        }
        message
    }
}

impl From<crate::core::config::ConfigError> for OCRError {
    fn from(err: crate::core::config::ConfigError) -> Self {
        Self::config_error(err.to_string())
    }
}

/// Convenient result alias for OCR operations.
pub type OcrResult<T> = Result<T, OCRError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_image_path_only_for_per_image_errors() {
        let load = OCRError::image_load(
            "a.png",
            image::ImageError::IoError(io::Error::new(io::ErrorKind::NotFound, "missing")),
        );
        assert_eq!(load.image_path(), Some(Path::new("a.png")));

        let rec = OCRError::recognition("b.png", "engine down");
        assert_eq!(rec.image_path(), Some(Path::new("b.png")));

        let fs = OCRError::filesystem("out", io::Error::other("denied"));
        assert!(fs.image_path().is_none());
    }

    #[test]
    fn test_chain_includes_source() {
        let err = OCRError::recognition("scan.jpg", "engine down");
        let chained = err.chain();
        assert!(chained.contains("scan.jpg"));
        assert!(chained.ends_with("engine down"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: OCRError = crate::core::config::ConfigError::InvalidConfig {
            message: "block size must be odd".to_string(),
        }
        .into();
        assert!(matches!(err, OCRError::ConfigError { .. }));
        assert!(err.to_string().contains("block size must be odd"));
    }
}
