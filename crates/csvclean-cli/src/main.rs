//! csv-clean: normalize one CSV file into clean CSV or xlsx.

use std::io::{self, IsTerminal};

use csvclean_cli::commands::clean_file;
use csvclean_cli::logging::{LogConfig, init_logging};

mod cli;

use crate::cli::{USAGE, parse_io_paths};

fn main() {
    let Some((input, output)) = parse_io_paths(std::env::args_os()) else {
        usage_exit()
    };

    init_logging(&LogConfig {
        with_ansi: io::stderr().is_terminal(),
        ..LogConfig::default()
    });

    let exit_code = match clean_file(&input, &output) {
        Ok(report) => {
            println!("[OK] saved -> {}", report.output.display());
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn usage_exit() -> ! {
    println!("{USAGE}");
    std::process::exit(1);
}
