//! Configuration for preprocessing and recognition.
//!
//! The utility takes no command-line options, so every setting lives here with
//! its default. Both structures can be adjusted through `with_*` setters and
//! are checked with [`ConfigValidator::validate`] before a batch starts.

use super::constants::{
    DEFAULT_BLOCK_SIZE, DEFAULT_BLUR_KERNEL, DEFAULT_DPI, DEFAULT_LANGUAGE, DEFAULT_OFFSET,
    DEFAULT_PAGE_SEG_MODE, ENGINE_MODE, MAX_PAGE_SEG_MODE,
};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error indicating that a configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Error indicating that a kernel or block size is unusable.
    #[error("{name} must be an odd number >= {min}, got {value}")]
    InvalidKernelSize {
        name: &'static str,
        value: u32,
        min: u32,
    },
}

/// A trait for validating configuration parameters.
pub trait ConfigValidator {
    /// Validates the configuration.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Validates that `value` is odd and at least `min`.
    fn validate_odd_kernel(
        &self,
        name: &'static str,
        value: u32,
        min: u32,
    ) -> Result<(), ConfigError> {
        if value < min || value % 2 == 0 {
            return Err(ConfigError::InvalidKernelSize { name, value, min });
        }
        Ok(())
    }
}

/// Parameters of the image cleanup applied before recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessConfig {
    /// Side of the square neighbourhood used for the local mean.
    pub block_size: u32,
    /// Constant subtracted from the local mean before comparison.
    pub offset: i32,
    /// Side of the square Gaussian kernel applied after thresholding.
    pub blur_kernel: u32,
}

impl PreprocessConfig {
    /// Creates the default configuration (block 11, offset 2, blur 5×5).
    pub fn new() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            offset: DEFAULT_OFFSET,
            blur_kernel: DEFAULT_BLUR_KERNEL,
        }
    }

    pub fn with_block_size(mut self, block_size: u32) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_blur_kernel(mut self, blur_kernel: u32) -> Self {
        self.blur_kernel = blur_kernel;
        self
    }
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidator for PreprocessConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.validate_odd_kernel("block_size", self.block_size, 3)?;
        self.validate_odd_kernel("blur_kernel", self.blur_kernel, 1)?;
        Ok(())
    }
}

/// Settings handed to the OCR engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionConfig {
    /// Tesseract language code, e.g. `eng` or `eng+deu`.
    pub language: String,
    /// Directory containing the `tessdata` files. `None` lets Tesseract use
    /// `TESSDATA_PREFIX` or its compiled-in default.
    pub data_path: Option<PathBuf>,
    /// Page segmentation mode (6 = assume a single uniform block of text).
    pub page_seg_mode: u8,
    /// Resolution hint for bitmaps without metadata.
    pub dpi: u32,
}

impl RecognitionConfig {
    /// Creates the default configuration: English, PSM 6, 300 DPI.
    pub fn new() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            data_path: None,
            page_seg_mode: DEFAULT_PAGE_SEG_MODE,
            dpi: DEFAULT_DPI,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(data_path.into());
        self
    }

    pub fn with_page_seg_mode(mut self, page_seg_mode: u8) -> Self {
        self.page_seg_mode = page_seg_mode;
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Renders the settings in Tesseract's command-line form.
    pub fn config_string(&self) -> String {
        format!(
            "--oem {} --psm {} --dpi {}",
            ENGINE_MODE, self.page_seg_mode, self.dpi
        )
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidator for RecognitionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.language.trim().is_empty() {
            return Err(ConfigError::InvalidConfig {
                message: "language must not be empty".to_string(),
            });
        }
        if self.page_seg_mode > MAX_PAGE_SEG_MODE {
            return Err(ConfigError::InvalidConfig {
                message: format!(
                    "page segmentation mode must be between 0 and {}, got {}",
                    MAX_PAGE_SEG_MODE, self.page_seg_mode
                ),
            });
        }
        if self.dpi == 0 {
            return Err(ConfigError::InvalidConfig {
                message: "dpi must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
