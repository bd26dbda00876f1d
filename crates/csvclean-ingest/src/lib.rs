//! Source file ingestion for csv-clean.
//!
//! Loads one CSV file into a polars DataFrame with every column kept as text.
//! Decoding is tried strictly in a primary encoding first; on any failure the
//! file is decoded again in a fallback encoding with lossy replacement.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use csvclean_ingest::read_csv_frame;
//!
//! let loaded = read_csv_frame(Path::new("orders.csv"))?;
//! println!("{} rows decoded as {}", loaded.frame.height(), loaded.encoding.name());
//! ```

mod encoding;
mod error;
mod loader;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use encoding::{IngestOptions, UTF8_BOM, decode_lossy, decode_strict};

// === CSV Reading ===
pub use table::{NA_TOKENS, is_na_token, normalize_headers, parse_csv_text, unnamed_header};
pub use loader::{LoadedFrame, read_csv_frame, read_csv_frame_with_options};
