//! Diagnostic logging to an optional file
//!
//! The wizard owns the terminal while it runs, so logs never go to stdout or
//! stderr. Without a log file no subscriber is installed and every `tracing`
//! event is dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber writing to `log_file`.
///
/// Returns `Ok(false)` when no log file was requested.
pub fn init_logging(log_file: Option<&Path>, level: &str) -> Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let filter =
        EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {}", level))?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false) // No color codes in log file
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(true)
}
