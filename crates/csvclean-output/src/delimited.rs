//! CSV output with a UTF-8 byte-order mark.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use polars::prelude::DataFrame;

use csvclean_common::any_to_string;

use crate::error::{OutputError, Result};

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `df` as CSV to `path`, replacing any existing file.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(df, BufWriter::new(file)).map_err(|err| match err {
        OutputError::Io { source, .. } => OutputError::Io {
            path: path.to_path_buf(),
            source,
        },
        OutputError::Csv { source, .. } => OutputError::Csv {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Writes `df` as BOM-prefixed CSV into any writer.
///
/// Missing cells are empty fields; numbers are written without a trailing
/// `.0`. A frame without columns produces only the BOM.
pub fn write_csv_to<W: Write>(df: &DataFrame, mut writer: W) -> Result<()> {
    let io_err = |source| OutputError::Io {
        path: Default::default(),
        source,
    };
    let csv_err = |source| OutputError::Csv {
        path: Default::default(),
        source,
    };

    writer.write_all(UTF8_BOM).map_err(io_err)?;

    let columns = df.get_columns();
    if columns.is_empty() {
        return writer.flush().map_err(io_err);
    }

    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer
        .write_record(columns.iter().map(|c| c.name().as_str()))
        .map_err(csv_err)?;

    let mut record = Vec::with_capacity(columns.len());
    for idx in 0..df.height() {
        record.clear();
        for column in columns {
            record.push(any_to_string(column.get(idx)?));
        }
        csv_writer.write_record(&record).map_err(csv_err)?;
    }

    csv_writer.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    fn render(df: &DataFrame) -> Vec<u8> {
        let mut buf = Vec::new();
        write_csv_to(df, &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_bom_header_and_rows() {
        let df = DataFrame::new(vec![
            Column::new("Name".into(), vec!["a", ""]),
            Column::new("Amount".into(), vec![Some(1200.0f64), None]),
        ])
        .unwrap();

        let out = render(&df);
        assert!(out.starts_with(UTF8_BOM));
        assert_eq!(&out[3..], b"Name,Amount\na,1200\n,\n");
    }

    #[test]
    fn test_fields_quoted_when_needed() {
        let df = DataFrame::new(vec![
            Column::new("note".into(), vec!["Smith, J", "say \"hi\""]),
            Column::new("n".into(), vec![12.5f64, -3.0]),
        ])
        .unwrap();

        let out = String::from_utf8(render(&df)).unwrap();
        assert_eq!(
            out.trim_start_matches('\u{feff}'),
            "note,n\n\"Smith, J\",12.5\n\"say \"\"hi\"\"\",-3\n"
        );
    }

    #[test]
    fn test_empty_frame_is_bom_only() {
        let out = render(&DataFrame::empty());
        assert_eq!(out, UTF8_BOM);
    }
}
