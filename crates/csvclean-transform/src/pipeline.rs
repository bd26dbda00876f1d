//! The cleaning pipeline.
//!
//! Stages run in this order, each over the whole frame:
//! 1. **Prune**: drop placeholder columns
//! 2. **Dates**: rewrite date-like columns as `YYYY-MM-DD`
//! 3. **Numbers**: coerce numeric-like columns to `Int64` or `Float64`
//! 4. **Fill**: replace missing text with `""`
//!
//! Each stage asks [`classify_column`] what a column is. Rows are never added
//! or removed.

use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::columns::{ColumnClass, classify_column, drop_placeholder_columns, rebuild};
use crate::error::Result;
use crate::normalization::{coerce_numeric_column, fill_missing_text, normalize_date_column};

/// What the pipeline changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub rows: usize,
    pub dropped_columns: Vec<String>,
    pub date_columns: Vec<String>,
    pub numeric_columns: Vec<String>,
}

/// Rewrites every date-like column; returns the rewritten names.
pub fn normalize_date_columns(df: &DataFrame) -> Result<(DataFrame, Vec<String>)> {
    let mut touched = Vec::new();
    let mut columns = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        if classify_column(column)? == ColumnClass::DateLike {
            touched.push(column.name().to_string());
            columns.push(normalize_date_column(column)?);
        } else {
            columns.push(column.clone());
        }
    }

    if !touched.is_empty() {
        info!(columns = ?touched, "normalized date columns");
    }
    Ok((rebuild(columns)?, touched))
}

/// Coerces every numeric-like text column; returns the coerced names.
///
/// Columns that are no longer text (already numeric) are left alone.
pub fn coerce_numeric_columns(df: &DataFrame) -> Result<(DataFrame, Vec<String>)> {
    let mut touched = Vec::new();
    let mut columns = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        if classify_column(column)? == ColumnClass::NumericLike {
            touched.push(column.name().to_string());
            columns.push(coerce_numeric_column(column)?);
        } else {
            columns.push(column.clone());
        }
    }

    if !touched.is_empty() {
        info!(columns = ?touched, "coerced numeric columns");
    }
    Ok((rebuild(columns)?, touched))
}

/// Replaces missing text cells with `""` in every column.
pub fn fill_missing(df: &DataFrame) -> Result<DataFrame> {
    let columns = df
        .get_columns()
        .iter()
        .map(fill_missing_text)
        .collect::<Result<Vec<_>>>()?;
    rebuild(columns)
}

/// Runs every stage and reports what changed.
pub fn clean_frame(df: &DataFrame) -> Result<(DataFrame, CleanSummary)> {
    let rows = df.height();
    debug!(rows, columns = df.width(), "cleaning frame");
    for column in df.get_columns() {
        let class = classify_column(column)?;
        debug!(column = column.name().as_str(), ?class, "classified column");
    }

    let (pruned, dropped_columns) = drop_placeholder_columns(df)?;
    let (dated, date_columns) = normalize_date_columns(&pruned)?;
    let (numbered, numeric_columns) = coerce_numeric_columns(&dated)?;
    let filled = fill_missing(&numbered)?;

    let summary = CleanSummary {
        rows: filled.height(),
        dropped_columns,
        date_columns,
        numeric_columns,
    };
    debug_assert!(filled.width() == 0 || summary.rows == rows);
    Ok((filled, summary))
}
