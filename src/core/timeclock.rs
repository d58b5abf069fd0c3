use crate::core::ledger::SessionLedger;
use crate::errors::AppResult;
use crate::models::UserRecord;
use crate::store::audit::ttlog_quiet;
use crate::store::{RecordStore, UserStore};
use crate::utils::date::format_date;
use crate::utils::time::format_timestamp;
use chrono::{NaiveDate, NaiveTime};

/// Employee-facing operations: load, apply one ledger step, save.
pub struct TimeclockLogic;

impl TimeclockLogic {
    pub fn clock_in(store: &RecordStore, id: u32, today: NaiveDate, now: NaiveTime) -> AppResult<UserRecord> {
        let users = UserStore::new(store);
        let mut record = users.load(id)?;

        SessionLedger::clock_in(&mut record, today, now)?;
        users.save(&mut record)?;

        ttlog_quiet(
            store,
            "in",
            &record.key(),
            &format!("Clocked in {} {}", format_date(today), format_timestamp(now)),
        );
        Ok(record)
    }

    pub fn clock_out(store: &RecordStore, id: u32, today: NaiveDate, now: NaiveTime) -> AppResult<UserRecord> {
        let users = UserStore::new(store);
        let mut record = users.load(id)?;

        SessionLedger::clock_out(&mut record, today, now)?;
        users.save(&mut record)?;

        ttlog_quiet(
            store,
            "out",
            &record.key(),
            &format!("Clocked out {} {}", format_date(today), format_timestamp(now)),
        );
        Ok(record)
    }

    pub fn add_note(store: &RecordStore, id: u32, text: &str, now: NaiveTime) -> AppResult<UserRecord> {
        let users = UserStore::new(store);
        let mut record = users.load(id)?;

        SessionLedger::add_note(&mut record, text, now)?;
        users.save(&mut record)?;

        ttlog_quiet(store, "note", &record.key(), text.trim());
        Ok(record)
    }
}
