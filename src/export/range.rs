// src/export/range.rs

use crate::core::summary::DateBounds;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse a period expression into inclusive date bounds.
///
/// Supporta:
/// - `None` / `all` → nessun filtro
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD (also `m-d-yyyy`)
/// - start:end with both sides in one of the forms above
pub fn parse_period(r: Option<&str>) -> AppResult<DateBounds> {
    match r.map(str::trim) {
        None => Ok(None),
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => parse_range(p).map(Some),
    }
}

pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((s, e)) => (bounds_of(s.trim())?.0, bounds_of(e.trim())?.1),
        None => bounds_of(r)?,
    };

    if start > end {
        return Err(AppError::InvalidDate(format!("range start is after end: {r}")));
    }
    Ok((start, end))
}

/// First and last day covered by a single year / month / day expression.
fn bounds_of(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    // YYYY
    if p.len() == 4 && p.chars().all(|c| c.is_ascii_digit()) {
        let y: i32 = p.parse().map_err(|_| invalid())?;
        let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
        let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
        return Ok((d1, d2));
    }

    // YYYY-MM
    if p.len() == 7 && p.as_bytes()[4] == b'-' {
        let y: i32 = p[0..4].parse().map_err(|_| invalid())?;
        let m: u32 = p[5..7].parse().map_err(|_| invalid())?;
        let last = month_last_day(y, m).ok_or_else(invalid)?;
        let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
        let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(invalid)?;
        return Ok((d1, d2));
    }

    // single day
    let d = crate::utils::date::parse_date(p)?;
    Ok((d, d))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
