//! Source loading with a single encoding fallback.

use std::path::Path;

use encoding_rs::Encoding;
use polars::prelude::DataFrame;
use tracing::{debug, info, warn};

use crate::encoding::{IngestOptions, decode_lossy, decode_strict};
use crate::error::{IngestError, Result};
use crate::table::parse_csv_text;

/// A loaded source table and the encoding that produced it.
#[derive(Debug, Clone)]
pub struct LoadedFrame {
    pub frame: DataFrame,
    pub encoding: &'static Encoding,
    /// True when the fallback decode replaced malformed bytes.
    pub had_replacements: bool,
}

impl LoadedFrame {
    /// True when the table came from the fallback attempt.
    pub fn used_fallback(&self, options: &IngestOptions) -> bool {
        self.encoding != options.primary
    }
}

/// Loads `path` with the default encodings (UTF-8, then Shift_JIS).
pub fn read_csv_frame(path: &Path) -> Result<LoadedFrame> {
    read_csv_frame_with_options(path, &IngestOptions::default())
}

/// Loads `path`, retrying once in the fallback encoding on any failure.
///
/// The primary attempt fails on unreadable files, malformed bytes, and
/// malformed CSV alike. Whatever the fallback attempt returns is final.
pub fn read_csv_frame_with_options(path: &Path, options: &IngestOptions) -> Result<LoadedFrame> {
    match load_strict(path, options.primary) {
        Ok(frame) => {
            info!(
                path = %path.display(),
                encoding = options.primary.name(),
                rows = frame.height(),
                columns = frame.width(),
                "loaded source"
            );
            Ok(LoadedFrame {
                frame,
                encoding: options.primary,
                had_replacements: false,
            })
        }
        Err(error) => {
            warn!(
                path = %path.display(),
                primary = options.primary.name(),
                fallback = options.fallback.name(),
                %error,
                "primary load failed, retrying with fallback encoding"
            );
            let (frame, had_replacements) = load_lossy(path, options.fallback)?;
            if had_replacements {
                warn!(
                    path = %path.display(),
                    encoding = options.fallback.name(),
                    "malformed bytes replaced during fallback decode"
                );
            }
            info!(
                path = %path.display(),
                encoding = options.fallback.name(),
                rows = frame.height(),
                columns = frame.width(),
                "loaded source"
            );
            Ok(LoadedFrame {
                frame,
                encoding: options.fallback,
                had_replacements,
            })
        }
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read source bytes");
    Ok(bytes)
}

fn load_strict(path: &Path, encoding: &'static Encoding) -> Result<DataFrame> {
    let bytes = read_bytes(path)?;
    let text = decode_strict(&bytes, encoding).ok_or_else(|| IngestError::Decode {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    })?;
    parse_csv_text(&text, path)
}

fn load_lossy(path: &Path, encoding: &'static Encoding) -> Result<(DataFrame, bool)> {
    let bytes = read_bytes(path)?;
    let (text, had_replacements) = decode_lossy(&bytes, encoding);
    Ok((parse_csv_text(&text, path)?, had_replacements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{SHIFT_JIS, UTF_8};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_utf8_source_uses_primary() {
        let file = create_temp_csv("名前,金額\n山田,1200\n".as_bytes());
        let loaded = read_csv_frame(file.path()).unwrap();

        assert_eq!(loaded.encoding, UTF_8);
        assert!(!loaded.had_replacements);
        assert!(!loaded.used_fallback(&IngestOptions::default()));
        assert_eq!(loaded.frame.height(), 1);
        assert!(loaded.frame.column("名前").is_ok());
    }

    #[test]
    fn test_shift_jis_source_uses_fallback() {
        // "日付\n1\n" in Shift_JIS
        let file = create_temp_csv(&[0x93, 0xFA, 0x95, 0x74, b'\n', b'1', b'\n']);
        let loaded = read_csv_frame(file.path()).unwrap();

        assert_eq!(loaded.encoding, SHIFT_JIS);
        assert!(loaded.used_fallback(&IngestOptions::default()));
        assert!(loaded.frame.column("日付").is_ok());
    }

    #[test]
    fn test_parse_failure_triggers_fallback() {
        // too many fields fails both attempts
        let file = create_temp_csv(b"a,b\n1,2,3\n");
        let result = read_csv_frame(file.path());
        assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    }

    #[test]
    fn test_missing_file_fails_after_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_csv_frame(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let file = create_temp_csv(b"\xEF\xBB\xBFName,Amount\nx,1\n");
        let loaded = read_csv_frame(file.path()).unwrap();
        assert_eq!(loaded.encoding, UTF_8);
        assert!(loaded.frame.column("Name").is_ok());
    }
}
