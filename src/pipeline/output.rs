//! Numbered output files.
//!
//! Every run writes to `<n>.txt`, where `n` is one more than the largest
//! integer-named `.txt` file already in the output directory, so earlier runs
//! are never overwritten.

use crate::core::{BLOCK_SEPARATOR, OCRError, OUTPUT_EXTENSION, OcrResult};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Returns the path of the next unused numbered output file in `dir`.
///
/// Names ending in `.txt` whose stem parses as a non-negative integer are
/// considered; everything else is ignored. Numbers only ever grow, so a
/// numbered name beyond `u64::MAX` is an error rather than being skipped. An empty or missing directory
/// yields `dir/1.txt`.
///
/// # Errors
///
/// Returns `OCRError::Filesystem` if the directory exists but cannot be
/// listed, or if the counter would overflow.
pub fn next_output_path(dir: &Path) -> OcrResult<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(numbered_path(dir, 1));
        }
        Err(err) => return Err(OCRError::filesystem(dir, err)),
    };

    let mut highest = 0u64;
    for entry in entries {
        let entry = entry.map_err(|err| OCRError::filesystem(dir, err))?;
        match entry.file_name().to_str().and_then(parse_output_number) {
            Some(Ok(number)) => highest = highest.max(number),
            Some(Err(_)) => return Err(counter_overflow(dir)),
            None => {}
        }
    }

    let next = highest
        .checked_add(1)
        .ok_or_else(|| counter_overflow(dir))?;
    Ok(numbered_path(dir, next))
}

/// Parses `"<n>.txt"` (optionally `"+<n>.txt"`) into `n`.
///
/// Returns `None` for names that are not numbered output files and
/// `Some(Err(_))` for numbered names too large for a `u64`.
fn parse_output_number(name: &str) -> Option<Result<u64, ParseIntError>> {
    let stem = name.strip_suffix(OUTPUT_EXTENSION)?.strip_suffix('.')?;
    let digits = stem.strip_prefix('+').unwrap_or(stem);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse())
}

fn counter_overflow(dir: &Path) -> OCRError {
    OCRError::filesystem(dir, io::Error::other("output file counter overflowed"))
}

fn numbered_path(dir: &Path, number: u64) -> PathBuf {
    dir.join(format!("{number}.{OUTPUT_EXTENSION}"))
}

/// Appends recognized text blocks to one output file.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    path: PathBuf,
}

impl ResultWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `text` followed by a blank line.
    ///
    /// The file is created if absent and opened in append mode for this call
    /// only; the handle is closed before returning, on success or failure.
    ///
    /// # Errors
    ///
    /// Returns `OCRError::Filesystem` if the file cannot be opened or written.
    pub fn append(&self, text: &str) -> OcrResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| OCRError::filesystem(&self.path, err))?;

        file.write_all(text.as_bytes())
            .and_then(|()| file.write_all(BLOCK_SEPARATOR.as_bytes()))
            .map_err(|err| OCRError::filesystem(&self.path, err))?;

        info!("Output successfully written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_next_output_path_ignores_non_numeric_names() {
        let dir = tempdir().unwrap();
        for name in ["3.txt", "7.txt", "x.txt"] {
            touch(dir.path(), name);
        }

        let next = next_output_path(dir.path()).unwrap();
        assert_eq!(next, dir.path().join("8.txt"));
    }

    #[test]
    fn test_next_output_path_empty_directory() {
        let dir = tempdir().unwrap();
        assert_eq!(next_output_path(dir.path()).unwrap(), dir.path().join("1.txt"));
    }

    #[test]
    fn test_next_output_path_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("not_there");
        assert_eq!(next_output_path(&missing).unwrap(), missing.join("1.txt"));
    }

    #[test]
    fn test_next_output_path_other_extensions_and_padding() {
        let dir = tempdir().unwrap();
        for name in ["12.md", "12.TXT", "05.txt", "-4.txt", "2.5.txt", ".txt", "notes.txt"] {
            touch(dir.path(), name);
        }

        let next = next_output_path(dir.path()).unwrap();
        assert_eq!(next, dir.path().join("6.txt"));
    }

    #[test]
    fn test_parse_output_number() {
        assert_eq!(parse_output_number("42.txt"), Some(Ok(42)));
        assert_eq!(parse_output_number("+42.txt"), Some(Ok(42)));
        assert_eq!(parse_output_number("42txt"), None);
        assert_eq!(parse_output_number("+.txt"), None);
        assert_eq!(parse_output_number("42.txt.bak"), None);
        assert!(matches!(
            parse_output_number("99999999999999999999999.txt"),
            Some(Err(_))
        ));
    }

    #[test]
    fn test_next_output_path_counts_plus_sign() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "+4.txt");
        touch(dir.path(), "2.txt");

        assert_eq!(next_output_path(dir.path()).unwrap(), dir.path().join("5.txt"));
    }

    #[test]
    fn test_next_output_path_oversized_number_is_an_error() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "99999999999999999999999.txt");
        touch(dir.path(), "2.txt");

        let err = next_output_path(dir.path()).unwrap_err();
        assert!(matches!(err, OCRError::Filesystem { .. }));
        assert!(err.chain().contains("output file counter overflowed"));
    }

    #[test]
    fn test_next_output_path_max_number_is_an_error() {
        let dir = tempdir().unwrap();
        touch(dir.path(), &format!("{}.txt", u64::MAX));

        let err = next_output_path(dir.path()).unwrap_err();
        assert!(err.chain().contains("output file counter overflowed"));
    }

    #[test]
    fn test_append_two_blocks() {
        let dir = tempdir().unwrap();
        let writer = ResultWriter::new(dir.path().join("1.txt"));

        writer.append("Hello").unwrap();
        writer.append("World").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "Hello\n\nWorld\n\n");
    }

    #[test]
    fn test_append_empty_text_writes_separator() {
        let dir = tempdir().unwrap();
        let writer = ResultWriter::new(dir.path().join("1.txt"));

        writer.append("").unwrap();
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "\n\n");
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let writer = ResultWriter::new(dir.path().join("missing").join("1.txt"));

        let err = writer.append("Hello").unwrap_err();
        assert!(matches!(err, OCRError::Filesystem { .. }));
    }
}
