//! Utilities - logging setup and console styling

mod logging;
mod styling;

pub use logging::init_logging;
pub use styling::{fatal_error_message, print_fatal_error};
