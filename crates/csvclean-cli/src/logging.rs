//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so that stdout carries only the usage line or the final
//! confirmation. The filter is fixed at `warn`: there is no flag or
//! environment variable to change it.
//!
//! # Log Levels
//!
//! - `error`: fatal errors
//! - `warn`: encoding fallback, replaced bytes
//! - `info`: stage progress, column counts
//! - `debug`: per-column classification and timings
//! - `trace`: unused
//!
//! Cell values are never logged; only column names and counts.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Crates whose events follow the configured level.
const CRATE_TARGETS: &[&str] = &[
    "csv_clean",
    "csvclean_cli",
    "csvclean_common",
    "csvclean_ingest",
    "csvclean_output",
    "csvclean_transform",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level for this tool's crates.
    pub level_filter: LevelFilter,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            with_target: false,
            with_ansi: false,
        }
    }
}

/// Initialize the global tracing subscriber on stderr.
///
/// Call once at startup.
pub fn init_logging(config: &LogConfig) {
    init_logging_with_writer(config, io::stderr);
}

/// Initialize logging with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .compact()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
        .without_time();

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(layer)
        .init();
}

/// Our crates at the configured level, everything else at warn or quieter.
fn default_directives(level: LevelFilter) -> String {
    let base = level.min(LevelFilter::WARN);
    let level = level.to_string().to_lowercase();
    let mut directives = vec![base.to_string().to_lowercase()];
    directives.extend(
        CRATE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::new(default_directives(config.level_filter))
}
