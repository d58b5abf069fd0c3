/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Grey for blank cells (open session, no notes), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// Green while clocked in, red otherwise.
pub fn colorize_status(clocked_in: bool) -> String {
    if clocked_in {
        format!("{GREEN}clocked in{RESET}")
    } else {
        format!("{RED}clocked out{RESET}")
    }
}
