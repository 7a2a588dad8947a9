//! ANSI color helper utilities for terminal output.

use crate::models::date_status::LogStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Status color: completed → green, pending → red.
pub fn color_for_status(status: LogStatus) -> &'static str {
    match status {
        LogStatus::Completed => GREEN,
        LogStatus::Pending => RED,
    }
}

/// Render a colored status tag for the CLI tables.
pub fn status_tag(status: LogStatus) -> String {
    let label = match status {
        LogStatus::Completed => "Completed",
        LogStatus::Pending => "Pending",
    };
    format!("{}{}{}", color_for_status(status), label, RESET)
}

/// Returns a greyed-out rendition of empty placeholder values ("--", "")
/// and the value unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
