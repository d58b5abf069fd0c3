//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Total worked time as shown in the user view: `8hrs 30min`.
pub fn format_total(mins: i64) -> String {
    let m = mins.max(0);
    format!("{}hrs {}min", m / 60, m % 60)
}

/// "First Last", or just "First" when the last name is blank.
pub fn display_name(first: &str, last: &str) -> String {
    if last.trim().is_empty() {
        first.trim().to_string()
    } else {
        format!("{} {}", first.trim(), last.trim())
    }
}
