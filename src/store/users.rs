//! Typed access to the `users` collection.

use super::record_store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::UserRecord;
use std::collections::HashSet;
use tracing::{debug, warn};

pub const USERS: &str = "users";

pub struct UserStore<'a> {
    store: &'a RecordStore,
}

impl<'a> UserStore<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Ids currently on disk. Keys that are not numbers are skipped.
    pub fn existing_ids(&self) -> AppResult<HashSet<u32>> {
        self.store.ensure_collection(USERS)?;
        let mut ids = HashSet::new();
        for key in self.store.list(USERS)? {
            match key.parse::<u32>() {
                Ok(id) => {
                    ids.insert(id);
                }
                Err(_) => debug!(key, "ignoring non-numeric user key"),
            }
        }
        Ok(ids)
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.existing_ids()?.is_empty())
    }

    /// Persist a brand-new user.
    pub fn insert(&self, record: &UserRecord) -> AppResult<()> {
        self.store.ensure_collection(USERS)?;
        self.store.create(USERS, &record.key(), record)
    }

    pub fn load(&self, id: u32) -> AppResult<UserRecord> {
        let mut record: UserRecord = self.store.read(USERS, &id.to_string())?;

        if record.id != id {
            return Err(AppError::Malformed {
                key: format!("{USERS}/{id}"),
                reason: format!("file holds user id {}", record.id),
            });
        }

        let open = record.open_count();
        if open > 1 {
            warn!(id, open, "user has more than one open session");
        }
        if record.sync_status() {
            warn!(id, status = record.session.status, "session.status resynced from data");
        }

        Ok(record)
    }

    /// Write `record` back, provided nobody saved it since it was loaded.
    ///
    /// On success the in-memory revision is bumped to match the file.
    pub fn save(&self, record: &mut UserRecord) -> AppResult<()> {
        let key = record.key();
        let current: UserRecord = self.store.read(USERS, &key)?;

        if current.revision != record.revision {
            return Err(AppError::Conflict {
                key: format!("{USERS}/{key}"),
                expected: record.revision,
                found: current.revision,
            });
        }

        record.sync_status();
        record.revision += 1;

        if let Err(e) = self.store.update(USERS, &key, record) {
            record.revision -= 1;
            return Err(e);
        }

        debug!(id = record.id, revision = record.revision, "user saved");
        Ok(())
    }

    pub fn remove(&self, id: u32) -> AppResult<()> {
        self.store.delete(USERS, &id.to_string())
    }

    /// Every user, ordered by id.
    pub fn all(&self) -> AppResult<Vec<UserRecord>> {
        let mut ids: Vec<u32> = self.existing_ids()?.into_iter().collect();
        ids.sort_unstable();
        ids.into_iter().map(|id| self.load(id)).collect()
    }
}
