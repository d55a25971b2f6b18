//! Error types for loading and exporting tabular data.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing CSV tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required setting, such as the ticker for a directory load, is absent.
    #[error("missing configuration: {0}")]
    MissingConfiguration(String),

    /// The input file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// A required numeric field could not be parsed.
    #[error("invalid {field} '{value}' at line {line} of {}", path.display())]
    Parse {
        /// Source file.
        path: PathBuf,
        /// 1-based line number, header included.
        line: u64,
        /// Column name.
        field: &'static str,
        /// Offending raw value.
        value: String,
    },

    /// Malformed CSV structure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Returns `FileNotFound` unless `path` exists.
pub(crate) fn ensure_exists(path: &std::path::Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(DataError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}
