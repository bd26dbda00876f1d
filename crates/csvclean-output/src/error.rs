//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the cleaned table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create the output's parent directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write the output file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Workbook generation failed.
    #[error("failed to write workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Table does not fit in a worksheet.
    #[error("{rows} rows x {columns} columns does not fit in a worksheet")]
    SheetLimit { rows: usize, columns: usize },

    /// Failed DataFrame access.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
