use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use csvclean_ingest::read_csv_frame;
use csvclean_output::{OutputFormat, write_frame};
use csvclean_transform::{CleanSummary, clean_frame};

/// Outcome of one successful run.
#[derive(Debug, Clone)]
pub struct CleanReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Name of the encoding the input was decoded with.
    pub encoding: &'static str,
    pub had_replacements: bool,
    pub summary: CleanSummary,
}

/// Loads `input`, cleans it, and writes the result to `output`.
///
/// Nothing is written when loading or cleaning fails.
pub fn clean_file(input: &Path, output: &Path) -> Result<CleanReport> {
    let clean_span = info_span!(
        "clean",
        input = %input.display(),
        output = %output.display()
    );
    let _clean_guard = clean_span.enter();

    let start = Instant::now();
    let loaded = info_span!("load")
        .in_scope(|| read_csv_frame(input))
        .with_context(|| format!("load {}", input.display()))?;
    debug!(elapsed_ms = start.elapsed().as_millis(), "load finished");

    let start = Instant::now();
    let (cleaned, summary) = info_span!("transform")
        .in_scope(|| clean_frame(&loaded.frame))
        .with_context(|| format!("clean {}", input.display()))?;
    debug!(elapsed_ms = start.elapsed().as_millis(), "transform finished");

    let start = Instant::now();
    let format = info_span!("write")
        .in_scope(|| write_frame(&cleaned, output))
        .with_context(|| format!("write {}", output.display()))?;
    debug!(elapsed_ms = start.elapsed().as_millis(), "write finished");

    let report = CleanReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        format,
        encoding: loaded.encoding.name(),
        had_replacements: loaded.had_replacements,
        summary,
    };
    log_summary(&report);
    Ok(report)
}

fn log_summary(report: &CleanReport) {
    let summary = &report.summary;
    info!(
        encoding = report.encoding,
        format = %report.format,
        rows = summary.rows,
        dropped = ?summary.dropped_columns,
        dates = ?summary.date_columns,
        numeric = ?summary.numeric_columns,
        "clean finished"
    );
}
