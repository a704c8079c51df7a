//! bhd: Binary-Hex-Decimal Converter CLI
//!
//! Launches the full-screen conversion wizard. `-h/--help` prints usage and
//! exits without touching the terminal.

use std::process::ExitCode;

use clap::Parser;

use bhd::cli::{run_tui, Cli};
use bhd::utils::{init_logging, print_fatal_error};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref(), cli.log_level()) {
        print_fatal_error(&e);
        return ExitCode::FAILURE;
    }

    match run_tui() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "wizard session failed");
            print_fatal_error(&e);
            ExitCode::FAILURE
        }
    }
}
