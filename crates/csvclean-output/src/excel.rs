//! xlsx workbook output.

use std::path::Path;

use polars::prelude::DataFrame;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use csvclean_common::{any_to_f64, any_to_string};

use crate::error::{OutputError, Result};

/// Worksheet name used for the single sheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Largest row count a worksheet holds, header included.
pub const MAX_SHEET_ROWS: usize = 1_048_576;

/// Largest column count a worksheet holds.
pub const MAX_SHEET_COLUMNS: usize = 16_384;

/// Writes `df` as a one-sheet workbook to `path`.
///
/// Row 0 holds the bold column names. Numbers are numeric cells, text is
/// string cells, and missing or empty cells are left blank.
pub fn write_excel(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() + 1 > MAX_SHEET_ROWS || df.width() > MAX_SHEET_COLUMNS {
        return Err(OutputError::SheetLimit {
            rows: df.height(),
            columns: df.width(),
        });
    }

    let mut workbook = build_workbook(df).map_err(|err| match err {
        SheetError::Xlsx(err) => workbook_error(path, &err),
        SheetError::Output(err) => err,
    })?;
    workbook.save(path).map_err(|err| workbook_error(path, &err))
}

enum SheetError {
    Xlsx(XlsxError),
    Output(OutputError),
}

impl From<XlsxError> for SheetError {
    fn from(err: XlsxError) -> Self {
        Self::Xlsx(err)
    }
}

impl From<polars::prelude::PolarsError> for SheetError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Output(err.into())
    }
}

fn workbook_error(path: &Path, err: &XlsxError) -> OutputError {
    OutputError::Workbook {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

// Limits are checked by the caller, so the index casts cannot truncate.
fn build_workbook(df: &DataFrame) -> std::result::Result<Workbook, SheetError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col_idx, column) in df.get_columns().iter().enumerate() {
        let col = col_idx as u16;
        worksheet.write_string_with_format(0, col, column.name().as_str(), &header_format)?;

        for row_idx in 0..df.height() {
            let row = (row_idx + 1) as u32;
            let value = column.get(row_idx)?;
            match any_to_f64(value.clone()) {
                Some(number) if number.is_finite() => {
                    worksheet.write_number(row, col, number)?;
                }
                _ => {
                    let text = any_to_string(value);
                    if !text.is_empty() {
                        worksheet.write_string(row, col, text)?;
                    }
                }
            }
        }
    }

    Ok(workbook)
}
