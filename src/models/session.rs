use super::serde_helpers::{clock_12h, iso_date, opt_clock_12h, opt_iso_date};
use crate::errors::AppResult;
use crate::utils::time::{format_hhmm, format_timestamp, minutes_between, whole_seconds};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timestamped note attached to a work session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(with = "clock_12h")]
    pub time: NaiveTime, // ⇔ "4:05:30 pm"
    pub note: String,
}

impl Note {
    pub fn new(time: NaiveTime, text: impl Into<String>) -> Self {
        Self {
            time: whole_seconds(time),
            note: text.into(),
        }
    }
}

/// One clock-in / clock-out pair.
///
/// The session is *open* while both `out_date` and `clock_out` are unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSession {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(with = "iso_date")]
    pub in_date: NaiveDate,
    #[serde(with = "opt_iso_date", default)]
    pub out_date: Option<NaiveDate>,
    #[serde(with = "clock_12h")]
    pub clock_in: NaiveTime,
    #[serde(with = "opt_clock_12h", default)]
    pub clock_out: Option<NaiveTime>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl WorkSession {
    /// New open session starting at `date` / `time`.
    pub fn open(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            in_date: date,
            out_date: None,
            clock_in: whole_seconds(time),
            clock_out: None,
            notes: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.out_date.is_none() && self.clock_out.is_none()
    }

    /// Both out fields set.
    pub fn is_closed(&self) -> bool {
        self.out_date.is_some() && self.clock_out.is_some()
    }

    pub fn started_at(&self) -> NaiveDateTime {
        self.in_date.and_time(self.clock_in)
    }

    pub fn ended_at(&self) -> Option<NaiveDateTime> {
        Some(self.out_date?.and_time(self.clock_out?))
    }

    /// Worked minutes for a closed session, `None` while open.
    pub fn worked_minutes(&self) -> AppResult<Option<i64>> {
        match self.ended_at() {
            Some(end) => minutes_between(self.started_at(), end).map(Some),
            None => Ok(None),
        }
    }

    /// `HH:MM` for closed sessions, empty otherwise.
    pub fn hours_label(&self) -> String {
        match self.worked_minutes() {
            Ok(Some(m)) => format_hhmm(m),
            _ => String::new(),
        }
    }

    pub fn clock_in_label(&self) -> String {
        format_timestamp(self.clock_in)
    }

    pub fn clock_out_label(&self) -> String {
        self.clock_out.map(format_timestamp).unwrap_or_default()
    }

    /// `time - note || time - note`
    pub fn notes_joined(&self) -> String {
        self.notes
            .iter()
            .map(|n| format!("{} - {}", format_timestamp(n.time), n.note))
            .collect::<Vec<_>>()
            .join(" || ")
    }
}
