//! Shared utilities for the csv-clean crates.
//!
//! Cell rendering lives here so that every writer turns a polars value into
//! text the same way.

pub mod polars;

pub use polars::{any_to_f64, any_to_string, format_numeric, string_values};
