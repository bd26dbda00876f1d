//! Best-effort calendar date parsing.
//!
//! Cells in date-like columns are parsed against a list of common layouts and
//! rewritten as `YYYY-MM-DD`. Slash, dash and dot dates with the year last are
//! read month-first; when that gives an invalid date they are read day-first.
//! A cell no layout accepts becomes missing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::Column;
use tracing::debug;

use crate::columns::text_values;
use crate::error::Result;

/// Output layout for normalized dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%m.%d.%Y",
    "%d.%m.%Y",
    "%m/%d/%y",
    "%d/%m/%y",
    "%d-%b-%Y", // 05-Jan-2024
    "%d %b %Y", // 5 Jan 2024
    "%b %d, %Y", // Jan 5, 2024
    "%b %d %Y",
    "%Y-%b-%d",
];

/// Nanosecond timestamp bounds; dates outside are unparseable.
fn in_supported_range(date: NaiveDate) -> bool {
    let min = NaiveDate::from_ymd_opt(1677, 9, 22);
    let max = NaiveDate::from_ymd_opt(2262, 4, 11);
    matches!((min, max), (Some(min), Some(max)) if date >= min && date <= max)
}

/// Parses a cell as a calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive()).filter(|d| in_supported_range(*d));
    }

    let datetimes = DATETIME_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date());
    let dates = DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok());

    datetimes
        .chain(dates)
        .chain(parse_compact(trimmed))
        .chain(parse_partial(trimmed))
        .find(|d| in_supported_range(*d))
}

/// `YYYYMMDD`.
fn parse_compact(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `YYYY-MM`, `YYYY/MM` (first of the month) and `YYYY` (January 1st).
fn parse_partial(value: &str) -> Option<NaiveDate> {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if value.len() == 4 && digits(value) {
        return NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1);
    }

    let (year, month) = value.split_once(['-', '/'])?;
    if year.len() != 4 || !digits(year) || month.is_empty() || month.len() > 2 || !digits(month)
    {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses and reformats one cell; `None` means the cell becomes missing.
pub fn normalize_date_value(value: &str) -> Option<String> {
    parse_date(value).map(format_date)
}

/// Rewrites every cell of a text column as `YYYY-MM-DD` or missing.
pub fn normalize_date_column(column: &Column) -> Result<Column> {
    let values = text_values(column)?;
    let mut unparsed = 0usize;

    let normalized: Vec<Option<String>> = values
        .iter()
        .map(|value| {
            let value = (*value)?;
            let out = normalize_date_value(value);
            if out.is_none() {
                unparsed += 1;
            }
            out
        })
        .collect();

    debug!(
        column = column.name().as_str(),
        unparsed, "normalized date column"
    );
    Ok(Column::new(column.name().clone(), normalized))
}
