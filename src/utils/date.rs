use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// m-d-yyyy (month/day padded or not)
static MDY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})$").expect("valid m-d-yyyy regex"));

// yyyy-mm-dd (storage format)
static ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid iso date regex"));

/// Parse a calendar date.
///
/// Accepts `m-d-yyyy` / `mm-dd-yyyy` and ISO `yyyy-mm-dd`. Two-digit years
/// are rejected.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    let trimmed = s.trim();

    let ymd = if let Some(c) = ISO.captures(trimmed) {
        numbers(&c, 1, 2, 3)
    } else if let Some(c) = MDY.captures(trimmed) {
        numbers(&c, 3, 1, 2)
    } else {
        None
    };

    ymd.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn numbers(c: &Captures<'_>, y: usize, m: usize, d: usize) -> Option<(i32, u32, u32)> {
    Some((c[y].parse().ok()?, c[m].parse().ok()?, c[d].parse().ok()?))
}

/// Storage / export representation.
pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
