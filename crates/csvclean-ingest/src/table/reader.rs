//! Parses decoded CSV text into a text-only DataFrame.

use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame};

use crate::error::{IngestError, Result};

use super::header::normalize_headers;

/// Cell values read as missing. Matched exactly; headers are never checked.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when `value` is one of [`NA_TOKENS`].
pub fn is_na_token(value: &str) -> bool {
    NA_TOKENS.contains(&value)
}

/// Parses CSV `text` into a DataFrame whose columns are all `String`.
///
/// - The first record is the header.
/// - Blank lines are skipped.
/// - Short rows are padded with missing cells; long rows are an error.
/// - Empty cells and [`NA_TOKENS`] are missing (null). Nothing is trimmed.
pub fn parse_csv_text(text: &str, path: &Path) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    let header = loop {
        match records.next() {
            Some(record) => {
                let record = record.map_err(|e| csv_error(path, &e))?;
                if !is_blank_record(&record, text) {
                    break record;
                }
            }
            None => {
                return Err(IngestError::EmptyCsv {
                    path: path.to_path_buf(),
                });
            }
        }
    };

    let raw_headers: Vec<&str> = header.iter().collect();
    let headers = normalize_headers(&raw_headers);
    let width = headers.len();
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); width];

    for record in records {
        let record = record.map_err(|e| csv_error(path, &e))?;
        if is_blank_record(&record, text) {
            continue;
        }
        if record.len() > width {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(IngestError::CsvParse {
                path: path.to_path_buf(),
                message: format!(
                    "expected {width} fields in line {line}, saw {}",
                    record.len()
                ),
            });
        }
        for (idx, column) in cells.iter_mut().enumerate() {
            let value = record.get(idx).filter(|v| !is_na_token(v));
            column.push(value.map(str::to_string));
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name.into(), values))
        .collect();

    let rows = columns.first().map_or(0, Column::len);
    tracing::debug!(
        path = %path.display(),
        rows,
        columns = width,
        "parsed CSV"
    );

    Ok(DataFrame::new(columns)?)
}

/// A line with nothing on it parses as one empty field, and so does `""`.
/// Only the former is blank; the latter is a row with one missing cell.
fn is_blank_record(record: &csv::StringRecord, text: &str) -> bool {
    if record.len() != 1 || !record.get(0).is_some_and(str::is_empty) {
        return false;
    }
    let start = record.position().map_or(0, |p| p.byte() as usize);
    text.as_bytes().get(start) != Some(&b'"')
}

fn csv_error(path: &Path, err: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;

    fn parse(text: &str) -> Result<DataFrame> {
        parse_csv_text(text, Path::new("test.csv"))
    }

    fn cells(df: &DataFrame, name: &str) -> Vec<Option<String>> {
        df.column(name)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect()
    }

    #[test]
    fn test_all_columns_are_text() {
        let df = parse("id,amount\n001,1200\n002,3400\n").unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        for column in df.get_columns() {
            assert_eq!(column.dtype(), &DataType::String);
        }
        // leading zeros are not lost
        assert_eq!(
            cells(&df, "id"),
            vec![Some("001".to_string()), Some("002".to_string())]
        );
    }

    #[test]
    fn test_empty_cells_are_missing() {
        let df = parse("a,b\nx,\n,y\n").unwrap();
        assert_eq!(cells(&df, "a"), vec![Some("x".to_string()), None]);
        assert_eq!(cells(&df, "b"), vec![None, Some("y".to_string())]);
    }

    #[test]
    fn test_na_tokens_are_missing() {
        let df = parse("Note\nNA\nnull\nN/A\n").unwrap();
        assert_eq!(cells(&df, "Note"), vec![None, None, None]);

        let df = parse("Note\nna\n NA\nNone\n#N/A\nNULLS\n").unwrap();
        assert_eq!(
            cells(&df, "Note"),
            vec![
                Some("na".to_string()),
                Some(" NA".to_string()),
                None,
                None,
                Some("NULLS".to_string()),
            ]
        );
    }

    #[test]
    fn test_na_header_is_kept() {
        let df = parse("NA,b\n1,2\n").unwrap();
        assert!(df.column("NA").is_ok());
    }

    #[test]
    fn test_short_rows_are_padded() {
        let df = parse("a,b,c\n1\n").unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(cells(&df, "c"), vec![None]);
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let result = parse("a,b\n1,2,3\n");
        assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let df = parse("a,b\n\n1,2\n\n3,4\n").unwrap();
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_quoted_empty_line_is_a_row() {
        let df = parse("note\n\"\"\nx\n").unwrap();
        assert_eq!(cells(&df, "note"), vec![None, Some("x".to_string())]);
    }

    #[test]
    fn test_quoted_fields_and_whitespace_kept() {
        let df = parse("name,note\n\"Smith, J\", spaced \n").unwrap();
        assert_eq!(cells(&df, "name"), vec![Some("Smith, J".to_string())]);
        assert_eq!(cells(&df, "note"), vec![Some(" spaced ".to_string())]);
    }

    #[test]
    fn test_header_only() {
        let df = parse("a,b\n").unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_empty_text_is_error() {
        assert!(matches!(parse(""), Err(IngestError::EmptyCsv { .. })));
        assert!(matches!(parse("\n\n"), Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_blank_header_cells_named() {
        let df = parse(",name\n0,x\n").unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["Unnamed: 0", "name"]);
    }
}
