// src/export/excel_date.rs

use crate::utils::time::parse_time_12h;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Prova a interpretare una cella del timesheet come data o orario,
/// restituendo il *seriale Excel* + formattazione numerica.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = d.and_hms_opt(0, 0, 0)?;
        return Some(("yyyy-mm-dd", naive_datetime_to_excel_serial(&dt)?));
    }

    if let Ok(t) = parse_time_12h(s) {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("h:mm:ss AM/PM", seconds / 86400.0));
    }

    None
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}
