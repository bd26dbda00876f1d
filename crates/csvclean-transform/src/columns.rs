//! Column classification by name and content.
//!
//! There is no declared schema: every run re-derives what a column is from
//! its header text and, for numbers, from its cells. Priority order:
//! 1. Placeholder name (`unnamed` anywhere, `FILLER` prefix)
//! 2. Date-like name (`date`, `日付`)
//! 3. Numeric-like content (any cell made only of digits and commas)
//! 4. Plain text

use polars::prelude::{Column, DataFrame, DataType};
use tracing::{debug, info};

use csvclean_common::string_values;

use crate::error::{Result, TransformError};
use crate::normalization::numeric::column_is_numeric_like;

/// Japanese header token for "date".
pub const DATE_TOKEN_JA: &str = "日付";

/// What a column is, as far as cleaning is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnClass {
    /// Non-data column, removed from the output.
    Placeholder,
    /// Holds calendar dates, rewritten as `YYYY-MM-DD`.
    DateLike,
    /// At least one cell is a comma-grouped integer; coerced to numbers.
    NumericLike,
    /// Left as text.
    Plain,
}

/// Classifies a column from its name and text cells.
pub fn classify(name: &str, values: &[Option<&str>]) -> ColumnClass {
    if is_placeholder_name(name) {
        ColumnClass::Placeholder
    } else if is_date_name(name) {
        ColumnClass::DateLike
    } else if column_is_numeric_like(values) {
        ColumnClass::NumericLike
    } else {
        ColumnClass::Plain
    }
}

/// Classifies a frame column. Columns that are no longer text are judged by
/// name alone, so an already-coerced number column stays [`ColumnClass::Plain`].
pub fn classify_column(column: &Column) -> Result<ColumnClass> {
    let name = column.name().as_str();
    if column.dtype() == &DataType::String {
        Ok(classify(name, &text_values(column)?))
    } else {
        Ok(classify(name, &[]))
    }
}

/// Auto-generated index columns (`Unnamed: 0`) and fixed-width padding (`FILLER1`).
pub fn is_placeholder_name(name: &str) -> bool {
    name.to_lowercase().contains("unnamed") || name.to_uppercase().starts_with("FILLER")
}

pub fn is_date_name(name: &str) -> bool {
    name.to_lowercase().contains("date") || name.contains(DATE_TOKEN_JA)
}

/// Borrows the cells of a text column, naming the column on a type mismatch.
pub(crate) fn text_values(column: &Column) -> Result<Vec<Option<&str>>> {
    if column.dtype() != &DataType::String {
        return Err(TransformError::NotText {
            column: column.name().to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    Ok(string_values(column)?)
}

/// Rebuilds a frame from stage output columns.
pub(crate) fn rebuild(columns: Vec<Column>) -> Result<DataFrame> {
    Ok(DataFrame::new(columns)?)
}

/// Removes placeholder columns, keeping the order of the rest.
///
/// Returns the cleaned frame and the names that were dropped.
pub fn drop_placeholder_columns(df: &DataFrame) -> Result<(DataFrame, Vec<String>)> {
    let mut dropped = Vec::new();
    let mut kept = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let name = column.name().as_str();
        if classify_column(column)? == ColumnClass::Placeholder {
            debug!(column = name, "dropping placeholder column");
            dropped.push(name.to_string());
        } else {
            kept.push(column.clone());
        }
    }

    if dropped.is_empty() {
        return Ok((df.clone(), dropped));
    }

    info!(count = dropped.len(), columns = ?dropped, "dropped placeholder columns");
    Ok((rebuild(kept)?, dropped))
}
