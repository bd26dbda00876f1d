//! Numeric coercion for comma-grouped number columns.
//!
//! Detection is per column and coarse: a single cell made only of digits and
//! commas marks the whole column numeric. Every cell is then stripped of
//! commas and parsed; cells that do not parse become missing, including text
//! that never looked numeric.
//!
//! A column whose parsed cells are all integers becomes `Int64`, so long
//! identifiers keep every digit. Any fractional or exponent value makes it
//! `Float64`.

use polars::prelude::Column;
use tracing::debug;

use crate::columns::text_values;
use crate::error::Result;

/// One parsed numeric cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    Int(i64),
    Float(f64),
}

impl ParsedNumber {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            Self::Float(_) => None,
        }
    }
}

/// True when `value` is non-empty and only ASCII digits and commas.
pub fn is_numeric_like(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit() || b == b',')
}

/// True when any present cell is numeric-like.
pub fn column_is_numeric_like(values: &[Option<&str>]) -> bool {
    values.iter().flatten().any(|value| is_numeric_like(value))
}

/// Parses a cell after removing thousands separators.
///
/// Signed integers that fit in `i64` parse exactly. Anything else Rust's
/// float parser accepts (decimals, exponents, huge integers) parses as a
/// float. NaN is treated as unparseable.
pub fn parse_numeric(value: &str) -> Option<ParsedNumber> {
    let cleaned = value.replace(',', "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(ParsedNumber::Int(int));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .map(ParsedNumber::Float)
}

/// Converts a text column to `Int64` or `Float64`; unparseable cells become null.
pub fn coerce_numeric_column(column: &Column) -> Result<Column> {
    let values = text_values(column)?;
    let numbers: Vec<Option<ParsedNumber>> = values
        .iter()
        .map(|value| value.and_then(parse_numeric))
        .collect();

    let unparsed = numbers.iter().filter(|n| n.is_none()).count()
        - values.iter().filter(|v| v.is_none()).count();
    let integral = numbers
        .iter()
        .flatten()
        .all(|n| matches!(n, ParsedNumber::Int(_)));
    debug!(
        column = column.name().as_str(),
        unparsed, integral, "coerced numeric column"
    );

    let name = column.name().clone();
    if integral {
        let ints: Vec<Option<i64>> = numbers
            .iter()
            .map(|n| n.and_then(ParsedNumber::as_i64))
            .collect();
        Ok(Column::new(name, ints))
    } else {
        let floats: Vec<Option<f64>> = numbers
            .iter()
            .map(|n| n.map(ParsedNumber::as_f64))
            .collect();
        Ok(Column::new(name, floats))
    }
}
