//! Constants shared across the crate.

/// Default neighbourhood size for adaptive thresholding.
pub const DEFAULT_BLOCK_SIZE: u32 = 11;

/// Default constant subtracted from the local mean.
pub const DEFAULT_OFFSET: i32 = 2;

/// Default Gaussian blur kernel size applied after thresholding.
pub const DEFAULT_BLUR_KERNEL: u32 = 5;

/// Default Tesseract language.
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Tesseract engine mode 3: legacy and LSTM engines, whichever are available.
pub const ENGINE_MODE: u8 = 3;

/// Tesseract page segmentation mode 6: a single uniform block of text.
pub const DEFAULT_PAGE_SEG_MODE: u8 = 6;

/// Highest page segmentation mode Tesseract accepts.
pub const MAX_PAGE_SEG_MODE: u8 = 13;

/// Resolution hint for bitmaps that carry no metadata.
pub const DEFAULT_DPI: u32 = 300;

/// Extension of the numbered output files.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Separator written after every recognized block.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Title of the file picker.
pub const DIALOG_TITLE: &str = "Select Image Files";
