//! Column cleaning for csv-clean.
//!
//! Takes the text-only frame produced by ingestion and:
//! - drops placeholder columns (`Unnamed: n`, `FILLER...`)
//! - rewrites date-like columns as `YYYY-MM-DD`
//! - coerces comma-grouped number columns to `Int64` (or `Float64` when a
//!   cell has a fraction)
//! - fills missing text with `""`
//!
//! # Example
//!
//! ```ignore
//! use csvclean_transform::clean_frame;
//!
//! let (cleaned, summary) = clean_frame(&loaded.frame)?;
//! tracing::info!(dropped = ?summary.dropped_columns, "cleaned");
//! ```
//!
//! Classification is a pure function of a column's name and cells (see
//! [`classify`]); nothing is remembered between runs.

mod columns;
mod error;
mod pipeline;

pub mod normalization;

// Classification
pub use columns::{
    ColumnClass, DATE_TOKEN_JA, classify, classify_column, drop_placeholder_columns, is_date_name,
    is_placeholder_name,
};

// Error type
pub use error::{Result, TransformError};

// Pipeline
pub use pipeline::{
    CleanSummary, clean_frame, coerce_numeric_columns, fill_missing, normalize_date_columns,
};
