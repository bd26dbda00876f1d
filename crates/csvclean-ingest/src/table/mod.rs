//! CSV text to DataFrame parsing.

mod header;
mod reader;

pub use header::{normalize_headers, unnamed_header};
pub use reader::{NA_TOKENS, is_na_token, parse_csv_text};
