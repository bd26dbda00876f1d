//! CLI library components for csv-clean.

pub mod commands;
pub mod logging;
