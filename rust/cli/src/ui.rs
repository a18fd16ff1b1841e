//! Helpers for consistent terminal output.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Format a win rate in [0, 1] as a percentage with one decimal.
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
