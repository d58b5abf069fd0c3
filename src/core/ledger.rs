//! Session open/close rules over `UserRecord::data`.
//!
//! Everything here mutates a record in memory only; persisting is the
//! caller's job (see `core::timeclock` and `core::users`). Every operation
//! either applies completely or leaves the record untouched.

use super::admin::AdminToken;
use crate::errors::{AppError, AppResult};
use crate::models::{Note, UserRecord, WorkSession};
use crate::utils::date::parse_date;
use crate::utils::time::{minutes_between, parse_time_12h, whole_seconds};
use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};
use uuid::Uuid;

/// A note as typed by the admin, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNote {
    pub time: String,
    pub note: String,
}

/// Raw replacement values for an edit. `None` keeps the current value.
///
/// An empty `out_date` / `clock_out` means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPatch {
    pub in_date: Option<String>,
    pub clock_in: Option<String>,
    pub out_date: Option<String>,
    pub clock_out: Option<String>,
    pub notes: Option<Vec<RawNote>>,
}

impl SessionPatch {
    pub fn is_empty(&self) -> bool {
        self == &SessionPatch::default()
    }
}

/// How a caller addresses a session: by position (fragile across deletes)
/// or by its stable id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSelector {
    Index(usize),
    Id(Uuid),
}

pub struct SessionLedger;

impl SessionLedger {
    /// Start a new session. Fails if one is already open.
    pub fn clock_in(record: &mut UserRecord, today: NaiveDate, now: NaiveTime) -> AppResult<Uuid> {
        if record.session.status || record.open_session().is_some() {
            return Err(AppError::InvalidState(format!(
                "user {} is already clocked in",
                record.id
            )));
        }

        let session = WorkSession::open(today, now);
        let id = session.id;
        record.data.push(session);
        record.session.status = true;

        debug!(user = record.id, session = %id, "clocked in");
        Ok(id)
    }

    /// Close the open session. Returns how many sessions were closed.
    ///
    /// More than one open session should not exist; if it does, all of them
    /// are closed.
    pub fn clock_out(record: &mut UserRecord, today: NaiveDate, now: NaiveTime) -> AppResult<usize> {
        if !record.session.status {
            return Err(AppError::InvalidState(format!(
                "user {} is not clocked in",
                record.id
            )));
        }

        let now = whole_seconds(now);
        let end = today.and_time(now);
        let open: Vec<usize> = record
            .data
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_open())
            .map(|(i, _)| i)
            .collect();

        if open.is_empty() {
            return Err(AppError::InvalidState(format!(
                "user {} is flagged as clocked in but has no open session",
                record.id
            )));
        }

        // validate all before touching any
        for &i in &open {
            minutes_between(record.data[i].started_at(), end)?;
        }

        if open.len() > 1 {
            warn!(user = record.id, count = open.len(), "closing several open sessions");
        }

        for &i in &open {
            let s = &mut record.data[i];
            s.out_date = Some(today);
            s.clock_out = Some(now);
        }
        record.session.status = false;

        debug!(user = record.id, closed = open.len(), "clocked out");
        Ok(open.len())
    }

    /// Append a note to the open session.
    pub fn add_note(record: &mut UserRecord, text: &str, now: NaiveTime) -> AppResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::InvalidState("note text is empty".into()));
        }

        if !record.session.status {
            return Err(AppError::InvalidState(format!(
                "user {} is not clocked in, notes need an open session",
                record.id
            )));
        }

        let id = record.id;
        let session = record.open_session_mut().ok_or_else(|| {
            AppError::InvalidState(format!("user {id} is flagged as clocked in but has no open session"))
        })?;

        session.notes.push(Note::new(now, text));
        Ok(())
    }

    /// Overwrite fields of `record.data[index]`.
    ///
    /// Malformed input leaves the session exactly as it was.
    pub fn edit_session<'r>(
        record: &'r mut UserRecord,
        _admin: &AdminToken,
        index: usize,
        patch: &SessionPatch,
    ) -> AppResult<&'r WorkSession> {
        check_index(record, index)?;

        let current = &record.data[index];
        let candidate = apply_patch(current, patch)?;
        validate_edit(current, &candidate)?;

        record.data[index] = candidate;
        record.sync_status();

        debug!(user = record.id, index, "session edited");
        Ok(&record.data[index])
    }

    pub fn edit_session_by_id<'r>(
        record: &'r mut UserRecord,
        admin: &AdminToken,
        session_id: Uuid,
        patch: &SessionPatch,
    ) -> AppResult<&'r WorkSession> {
        let index = position_of(record, session_id)?;
        Self::edit_session(record, admin, index, patch)
    }

    /// Remove `record.data[index]`; later sessions shift down by one.
    pub fn delete_session(record: &mut UserRecord, _admin: &AdminToken, index: usize) -> AppResult<WorkSession> {
        check_index(record, index)?;

        let removed = record.data.remove(index);
        record.sync_status();

        debug!(user = record.id, index, session = %removed.id, "session deleted");
        Ok(removed)
    }

    pub fn delete_session_by_id(
        record: &mut UserRecord,
        admin: &AdminToken,
        session_id: Uuid,
    ) -> AppResult<WorkSession> {
        let index = position_of(record, session_id)?;
        Self::delete_session(record, admin, index)
    }
}

fn check_index(record: &UserRecord, index: usize) -> AppResult<()> {
    if index >= record.data.len() {
        return Err(AppError::SessionNotFound(format!(
            "index {} (user {} has {} sessions)",
            index,
            record.id,
            record.data.len()
        )));
    }
    Ok(())
}

fn position_of(record: &UserRecord, session_id: Uuid) -> AppResult<usize> {
    record
        .data
        .iter()
        .position(|s| s.id == session_id)
        .ok_or_else(|| AppError::SessionNotFound(format!("{} (user {})", session_id, record.id)))
}

/// Build the edited session on a copy; the original is never touched.
fn apply_patch(current: &WorkSession, patch: &SessionPatch) -> AppResult<WorkSession> {
    let mut s = current.clone();

    if let Some(d) = &patch.in_date {
        s.in_date = parse_date(d)?;
    }
    if let Some(t) = &patch.clock_in {
        s.clock_in = parse_time_12h(t)?;
    }
    if let Some(d) = &patch.out_date {
        s.out_date = if d.trim().is_empty() { None } else { Some(parse_date(d)?) };
    }
    if let Some(t) = &patch.clock_out {
        s.clock_out = if t.trim().is_empty() {
            None
        } else {
            Some(parse_time_12h(t)?)
        };
    }
    if let Some(notes) = &patch.notes {
        s.notes = notes
            .iter()
            .map(|n| Ok(Note::new(parse_time_12h(&n.time)?, n.note.trim())))
            .collect::<AppResult<Vec<_>>>()?;
    }

    Ok(s)
}

fn validate_edit(current: &WorkSession, candidate: &WorkSession) -> AppResult<()> {
    if current.is_closed() && !candidate.is_closed() {
        return Err(AppError::InvalidState("a closed session cannot be reopened".into()));
    }

    if candidate.out_date.is_some() != candidate.clock_out.is_some() {
        return Err(AppError::InvalidState("outDate and clockOut must be set together".into()));
    }

    if let Some(end) = candidate.ended_at() {
        minutes_between(candidate.started_at(), end)?;
    }

    Ok(())
}
