//! Cell-level normalization stages.
//!
//! - **datetime**: best-effort date parsing, rewritten as `YYYY-MM-DD`
//! - **numeric**: comma-grouped number detection and coercion
//! - **missing**: empty-string filling for text columns

pub mod datetime;
pub mod missing;
pub mod numeric;

pub use datetime::{format_date, normalize_date_column, normalize_date_value, parse_date};
pub use missing::fill_missing_text;
pub use numeric::{
    ParsedNumber, coerce_numeric_column, column_is_numeric_like, is_numeric_like, parse_numeric,
};
