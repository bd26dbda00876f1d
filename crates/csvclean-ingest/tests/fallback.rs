//! Integration tests for encoding fallback.

use std::fs;
use std::path::Path;

use encoding_rs::{SHIFT_JIS, UTF_8, WINDOWS_1252};

use csvclean_ingest::{IngestOptions, LoadedFrame, read_csv_frame, read_csv_frame_with_options};

fn write_source(dir: &Path, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join("source.csv");
    fs::write(&path, bytes).unwrap();
    path
}

fn column(loaded: &LoadedFrame, name: &str) -> Vec<Option<String>> {
    loaded
        .frame
        .column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}

#[test]
fn bytes_invalid_everywhere_are_replaced() {
    let dir = tempfile::tempdir().unwrap();
    // 0xFF is malformed in both UTF-8 and Shift_JIS
    let path = write_source(dir.path(), b"Name,Note\nab\xFF,ok\n");

    let loaded = read_csv_frame(&path).unwrap();

    assert_eq!(loaded.encoding, SHIFT_JIS);
    assert!(loaded.had_replacements);
    assert_eq!(column(&loaded, "Name"), vec![Some("ab\u{FFFD}".to_string())]);
    assert_eq!(column(&loaded, "Note"), vec![Some("ok".to_string())]);
}

#[test]
fn custom_fallback_encoding() {
    let dir = tempfile::tempdir().unwrap();
    // "café" in Windows-1252
    let path = write_source(dir.path(), b"Name\ncaf\xE9\n");
    let options = IngestOptions::default().with_fallback(WINDOWS_1252);

    let loaded = read_csv_frame_with_options(&path, &options).unwrap();

    assert!(loaded.used_fallback(&options));
    assert!(!loaded.had_replacements);
    assert_eq!(column(&loaded, "Name"), vec![Some("café".to_string())]);
}

#[test]
fn primary_can_be_changed() {
    let dir = tempfile::tempdir().unwrap();
    // "日付" in Shift_JIS, read strictly as the primary
    let path = write_source(dir.path(), &[0x93, 0xFA, 0x95, 0x74, b'\n', b'1', b'\n']);
    let options = IngestOptions::default()
        .with_primary(SHIFT_JIS)
        .with_fallback(UTF_8);

    let loaded = read_csv_frame_with_options(&path, &options).unwrap();

    assert_eq!(loaded.encoding, SHIFT_JIS);
    assert!(!loaded.used_fallback(&options));
    assert_eq!(column(&loaded, "日付"), vec![Some("1".to_string())]);
}

#[test]
fn rows_with_all_cells_missing_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), b"A,B\n,\n1,2\n,\n");

    let loaded = read_csv_frame(&path).unwrap();

    assert_eq!(loaded.frame.height(), 3);
    assert_eq!(
        column(&loaded, "A"),
        vec![None, Some("1".to_string()), None]
    );
}
