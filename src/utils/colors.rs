/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const ROSE: &str = "\x1b[38;5;211m";

/// Highlight used for the current day on the calendar grid.
pub const TODAY: &str = "\x1b[1;30;45m";

/// Wrap a value in GREY when it is a placeholder ("", "--").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Read marker: green when read, grey otherwise.
pub fn colorize_read(is_read: bool) -> String {
    if is_read {
        format!("{GREEN}✔ read{RESET}")
    } else {
        format!("{GREY}unread{RESET}")
    }
}
