//! Time utilities: parsing 12-hour clock strings, elapsed-time computation,
//! formatting minutes and timestamps.

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

/// `h:mm:ss am` / `hh:mm:ss PM`, one optional space before the marker.
static CLOCK_12H: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,2}):(\d{2}):(\d{2}) ?(am|pm)$").expect("valid clock regex")
});

/// Parse a 12-hour clock string (`"4:05:30 pm"`) into a time of day.
///
/// 12am maps to hour 0, 12pm stays 12, every other pm hour gets +12.
pub fn parse_time_12h(s: &str) -> AppResult<NaiveTime> {
    let trimmed = s.trim();
    let caps = CLOCK_12H
        .captures(trimmed)
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    let field = |i: usize| -> AppResult<u32> {
        caps[i]
            .parse::<u32>()
            .map_err(|_| AppError::InvalidTime(s.to_string()))
    };

    let hour = field(1)?;
    let minute = field(2)?;
    let second = field(3)?;

    if !(1..=12).contains(&hour) {
        return Err(AppError::InvalidTime(s.to_string()));
    }

    let pm = caps[4].eq_ignore_ascii_case("pm");
    let hour24 = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour24, minute, second).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Compose a calendar date and a 12-hour clock string into one instant.
pub fn parse_clock_time(date_str: &str, time_str: &str) -> AppResult<NaiveDateTime> {
    let date = parse_date(date_str)?;
    let time = parse_time_12h(time_str)?;
    Ok(date.and_time(time))
}

/// Whole minutes from `start` to `end`. A negative span is rejected.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<i64> {
    let duration = end - start;
    if duration.num_seconds() < 0 {
        return Err(AppError::InvalidState(format!(
            "clock-out {} precedes clock-in {}",
            end.format("%Y-%m-%d %H:%M:%S"),
            start.format("%Y-%m-%d %H:%M:%S")
        )));
    }
    Ok(duration.num_minutes())
}

/// Elapsed time between two (date, 12-hour time) pairs as `HH:MM`.
///
/// Hours are not wrapped at 24: a session spanning two days reports `26:15`.
pub fn elapsed(in_date: &str, in_time: &str, out_date: &str, out_time: &str) -> AppResult<String> {
    let start = parse_clock_time(in_date, in_time)?;
    let end = parse_clock_time(out_date, out_time)?;
    Ok(format_hhmm(minutes_between(start, end)?))
}

pub fn format_hhmm(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Canonical event timestamp: `h:mm:ss am` (no zero padding on the hour).
pub fn format_timestamp(t: NaiveTime) -> String {
    t.format("%-I:%M:%S %P").to_string()
}

/// Drop sub-second precision; stored clock strings only carry seconds.
pub fn whole_seconds(t: NaiveTime) -> NaiveTime {
    t.with_nanosecond(0).unwrap_or(t)
}

/// Current local date and time, truncated to whole seconds.
pub fn now_stamp() -> (NaiveDate, NaiveTime) {
    let now = Local::now().naive_local();
    (now.date(), whole_seconds(now.time()))
}
