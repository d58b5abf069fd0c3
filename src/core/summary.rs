//! Per-session hours, date-range filtering and totals.

use crate::models::{UserRecord, WorkSession};
use crate::utils::formatting::format_total;
use crate::utils::time::format_hhmm;
use chrono::NaiveDate;
use tracing::warn;

/// Inclusive `inDate` bounds; `None` means everything.
pub type DateBounds = Option<(NaiveDate, NaiveDate)>;

#[derive(Debug, Clone)]
pub struct SessionRow<'a> {
    /// Position in `UserRecord::data` at the time the summary was built.
    pub index: usize,
    pub session: &'a WorkSession,
    /// `None` while the session is open, or when its out instant precedes
    /// its in instant.
    pub minutes: Option<i64>,
}

impl SessionRow<'_> {
    pub fn hours_label(&self) -> String {
        self.minutes.map(format_hhmm).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct Timesheet<'a> {
    pub rows: Vec<SessionRow<'a>>,
    pub total_minutes: i64,
}

impl<'a> Timesheet<'a> {
    /// Sessions of `record` whose `inDate` falls within `bounds`.
    ///
    /// A closed session that ends before it starts is listed with blank
    /// hours and left out of the total.
    pub fn build(record: &'a UserRecord, bounds: DateBounds) -> Self {
        let mut rows = Vec::new();
        let mut total_minutes = 0;

        for (index, session) in record.data.iter().enumerate() {
            if !in_bounds(session.in_date, bounds) {
                continue;
            }
            let minutes = match session.worked_minutes() {
                Ok(m) => m,
                Err(e) => {
                    warn!(user = record.id, index, session = %session.id, error = %e, "session skipped in totals");
                    None
                }
            };
            total_minutes += minutes.unwrap_or(0);
            rows.push(SessionRow {
                index,
                session,
                minutes,
            });
        }

        Self { rows, total_minutes }
    }

    /// Only sessions with both out fields set.
    pub fn closed_rows(&self) -> impl Iterator<Item = &SessionRow<'a>> {
        self.rows.iter().filter(|r| r.session.is_closed())
    }

    /// `8hrs 30min`
    pub fn total_label(&self) -> String {
        format_total(self.total_minutes)
    }

    /// `08:30`
    pub fn total_hhmm(&self) -> String {
        format_hhmm(self.total_minutes)
    }
}

pub fn in_bounds(d: NaiveDate, bounds: DateBounds) -> bool {
    match bounds {
        Some((start, end)) => d >= start && d <= end,
        None => true,
    }
}
