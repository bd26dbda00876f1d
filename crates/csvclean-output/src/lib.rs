//! Output generation for csv-clean.
//!
//! The output file's extension picks the format: `.xls`/`.xlsx` produce a
//! workbook, anything else produces UTF-8 CSV with a byte-order mark. Parent
//! directories are created first. Writes go straight to the target path, so
//! a failure can leave a partial file behind.

mod common;
mod delimited;
mod error;
mod excel;
mod format;

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

pub use common::ensure_parent_dir;
pub use delimited::{UTF8_BOM, write_csv, write_csv_to};
pub use error::{OutputError, Result};
pub use excel::{MAX_SHEET_COLUMNS, MAX_SHEET_ROWS, SHEET_NAME, write_excel};
pub use format::OutputFormat;

/// Writes `df` to `path` in the format its extension selects.
pub fn write_frame(df: &DataFrame, path: &Path) -> Result<OutputFormat> {
    let format = OutputFormat::from_path(path);
    ensure_parent_dir(path)?;

    match format {
        OutputFormat::Csv => write_csv(df, path)?,
        OutputFormat::Excel => write_excel(df, path)?,
    }

    info!(
        path = %path.display(),
        %format,
        rows = df.height(),
        columns = df.width(),
        "wrote output"
    );
    Ok(format)
}
