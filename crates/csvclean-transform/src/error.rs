//! Error types for the cleaning stages.

use thiserror::Error;

/// Errors raised while transforming a table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A stage that rewrites text met a column of another type.
    #[error("column '{column}' is {dtype}, expected text")]
    NotText { column: String, dtype: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
