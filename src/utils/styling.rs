//! Terminal styling for messages printed outside the full-screen wizard

use console::style;

/// Format the fatal error line shown when the terminal session fails
pub fn fatal_error_message(error: &anyhow::Error) -> String {
    format!(
        "{} {}",
        style("Something went wrong:").red().bold(),
        style(format!("{:#}", error)).red()
    )
}

/// Print a fatal error to standard output
pub fn print_fatal_error(error: &anyhow::Error) {
    println!("{}", fatal_error_message(error));
}
