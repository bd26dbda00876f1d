//! Polars `AnyValue` helpers.
//!
//! The cleaned table only ever holds text (`String`), integer (`Int64`) and
//! float (`Float64`) columns, plus nulls for missing cells. These helpers
//! render those values for output and read text columns back out for the
//! transform stages.

use polars::prelude::{AnyValue, Column, PolarsResult};

/// Renders a cell for delimited output.
///
/// Missing cells render as an empty string, numbers render without a
/// trailing `.0`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use csvclean_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Float64(1200.0)), "1200");
/// assert_eq!(any_to_string(AnyValue::Int64(9007199254740993)), "9007199254740993");
/// assert_eq!(any_to_string(AnyValue::String("abc")), "abc");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Float64(v) if v.is_nan() => String::new(),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => {
            let s = other.to_string();
            // Display wraps strings in quotes
            if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Formats a float without trailing zeros after the decimal point.
///
/// Integer-valued floats like `3400.0` are formatted as `"3400"`.
///
/// # Examples
///
/// ```
/// use csvclean_common::format_numeric;
///
/// assert_eq!(format_numeric(3400.0), "3400");
/// assert_eq!(format_numeric(12.5), "12.5");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts a numeric cell to `f64`. Text and missing cells yield `None`.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Float64(v) if !v.is_nan() => Some(v),
        AnyValue::Int64(v) => Some(v as f64),
        _ => None,
    }
}

/// Borrows the cells of a text column. Fails if the column is not `String`.
pub fn string_values(column: &Column) -> PolarsResult<Vec<Option<&str>>> {
    Ok(column.str()?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::Float64(f64::NAN)), "");
    }

    #[test]
    fn test_any_to_string_floats() {
        assert_eq!(any_to_string(AnyValue::Float64(1200.0)), "1200");
        assert_eq!(any_to_string(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(-45.25)), "-45.25");
    }

    #[test]
    fn test_any_to_string_strings() {
        assert_eq!(any_to_string(AnyValue::String("hello")), "hello");
        assert_eq!(any_to_string(AnyValue::String("")), "");
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(0.0), "0");
        // trailing zeros in the integer part stay
        assert_eq!(format_numeric(40.0), "40");
        assert_eq!(format_numeric(1000.0), "1000");
        assert_eq!(format_numeric(10.5), "10.5");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(any_to_f64(AnyValue::Float64(3.25)), Some(3.25));
        assert_eq!(any_to_f64(AnyValue::Int64(7)), Some(7.0));
        assert_eq!(any_to_f64(AnyValue::String("2.5")), None);
    }

    #[test]
    fn test_any_to_string_integers() {
        assert_eq!(any_to_string(AnyValue::Int64(1200)), "1200");
        assert_eq!(any_to_string(AnyValue::Int64(-7)), "-7");
        assert_eq!(
            any_to_string(AnyValue::Int64(1_234_567_890_123_456_789)),
            "1234567890123456789"
        );
    }

    #[test]
    fn test_string_values() {
        let column = Column::new("a".into(), vec![Some("x"), None, Some("")]);
        assert_eq!(
            string_values(&column).unwrap(),
            vec![Some("x"), None, Some("")]
        );

        let numbers = Column::new("n".into(), vec![1.0f64, 2.0]);
        assert!(string_values(&numbers).is_err());
    }
}
