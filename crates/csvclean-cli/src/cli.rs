//! CLI argument definitions for csv-clean.
//!
//! The command line is exactly `csv-clean INPUT OUTPUT`. There are no flags:
//! any other shape, including `--help`, is answered with [`USAGE`].

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Printed on stdout when the positional arguments are wrong.
pub const USAGE: &str = "usage: csv-clean input.csv output.csv(or .xlsx)";

#[derive(Parser)]
#[command(
    name = "csv-clean",
    about = "Normalize a CSV file and write it as CSV or xlsx",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Input CSV file followed by the output file.
    #[arg(
        value_name = "PATH",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// The input and output paths, when exactly two were given.
    pub fn into_io_paths(self) -> Option<(PathBuf, PathBuf)> {
        let mut paths = self.paths.into_iter();
        match (paths.next(), paths.next(), paths.next()) {
            (Some(input), Some(output), None) => Some((input, output)),
            _ => None,
        }
    }
}

/// Parses the raw argument list, program name included.
///
/// Returns `None` unless there are exactly three raw arguments and both
/// paths come through, so `--` and flag-looking values never shift the count.
pub fn parse_io_paths<I, T>(args: I) -> Option<(PathBuf, PathBuf)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 3 {
        return None;
    }
    Cli::try_parse_from(args).ok()?.into_io_paths()
}
