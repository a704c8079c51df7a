//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Log filter applied when `--log-level` is not given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Binary-Hex-Decimal Converter
#[derive(Parser, Debug)]
#[command(name = "bhd")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Description:\n  Allows you to convert between binary, hexadecimal, and decimal numbers."
)]
// Unrecognised arguments fall through to the wizard instead of aborting
#[command(ignore_errors = true)]
pub struct Cli {
    /// Append diagnostic logs to this file.
    /// Nothing is logged when omitted.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used with --log-file (e.g. "debug" or "bhd=trace").
    /// Defaults to "info".
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Effective log filter directive
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
