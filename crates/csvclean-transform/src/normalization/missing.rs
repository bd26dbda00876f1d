//! Missing value filling.

use polars::prelude::{Column, DataType};

use crate::error::Result;

/// Replaces nulls in a text column with `""`.
///
/// Number columns are returned unchanged: they cannot hold text, and writers
/// render their nulls as empty cells.
pub fn fill_missing_text(column: &Column) -> Result<Column> {
    if column.dtype() != &DataType::String {
        return Ok(column.clone());
    }
    let filled: Vec<&str> = column
        .str()?
        .into_iter()
        .map(|value| value.unwrap_or(""))
        .collect();
    Ok(Column::new(column.name().clone(), filled))
}
