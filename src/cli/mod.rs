//! CLI module - argument parsing and the interactive terminal session

mod args;
mod tui;

pub use args::{Cli, DEFAULT_LOG_LEVEL};
pub use tui::run_tui;
