use crate::core::admin::AdminToken;
use crate::core::ids;
use crate::core::ledger::{SessionLedger, SessionPatch, SessionSelector};
use crate::errors::{AppError, AppResult};
use crate::models::{Level, UserRecord, WorkSession};
use crate::store::audit::ttlog_quiet;
use crate::store::{RecordStore, UserStore};
use tracing::debug;

/// Attempts before giving up when a freshly drawn id turns out to be taken.
const CREATE_ATTEMPTS: usize = 3;

/// Admin-facing operations on users and their sessions.
pub struct UserLogic;

impl UserLogic {
    /// Create a user with a fresh random id.
    ///
    /// An empty store accepts one admin without a token (bootstrap); after
    /// that a token is required.
    pub fn create(
        store: &RecordStore,
        admin: Option<&AdminToken>,
        first_name: &str,
        last_name: &str,
        level: Level,
    ) -> AppResult<UserRecord> {
        if first_name.trim().is_empty() {
            return Err(AppError::InvalidState("first name is required".into()));
        }

        let users = UserStore::new(store);
        let bootstrap = AdminToken::bootstrap();

        let token = match admin {
            Some(t) => t,
            None if users.is_empty()? => {
                if !level.is_admin() {
                    return Err(AppError::PermissionDenied("the first user must be an admin".into()));
                }
                &bootstrap
            }
            None => {
                return Err(AppError::PermissionDenied("creating users requires an admin".into()));
            }
        };

        let mut last_err = None;
        for _ in 0..CREATE_ATTEMPTS {
            let id = ids::generate(&users.existing_ids()?)?;
            let record = UserRecord::new(id, first_name, last_name, level.clone());

            match users.insert(&record) {
                Ok(()) => {
                    ttlog_quiet(
                        store,
                        "user_add",
                        &record.key(),
                        &format!("{} ({}) created by {}", record.display_name(), record.level, token.actor()),
                    );
                    return Ok(record);
                }
                Err(e @ AppError::AlreadyExists(_)) => {
                    debug!(id, "id taken between listing and create, drawing again");
                    last_err = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err.unwrap_or_else(|| AppError::InvalidState("could not allocate a user id".into())))
    }

    /// Remove a user file. No soft delete.
    pub fn delete(store: &RecordStore, admin: &AdminToken, id: u32) -> AppResult<UserRecord> {
        let users = UserStore::new(store);
        let record = users.load(id)?;

        if admin.admin_id() == Some(id) {
            return Err(AppError::InvalidState("an admin cannot delete their own account".into()));
        }

        users.remove(id)?;
        ttlog_quiet(
            store,
            "user_del",
            &record.key(),
            &format!("{} deleted by {}", record.display_name(), admin.actor()),
        );
        Ok(record)
    }

    pub fn edit_session(
        store: &RecordStore,
        admin: &AdminToken,
        id: u32,
        selector: SessionSelector,
        patch: &SessionPatch,
    ) -> AppResult<UserRecord> {
        let users = UserStore::new(store);
        let mut record = users.load(id)?;

        let edited = match selector {
            SessionSelector::Index(i) => SessionLedger::edit_session(&mut record, admin, i, patch)?,
            SessionSelector::Id(sid) => SessionLedger::edit_session_by_id(&mut record, admin, sid, patch)?,
        };
        let session_id = edited.id;

        users.save(&mut record)?;
        ttlog_quiet(
            store,
            "edit",
            &record.key(),
            &format!("session {} edited by {}", session_id, admin.actor()),
        );
        Ok(record)
    }

    pub fn delete_session(
        store: &RecordStore,
        admin: &AdminToken,
        id: u32,
        selector: SessionSelector,
    ) -> AppResult<WorkSession> {
        let users = UserStore::new(store);
        let mut record = users.load(id)?;

        let removed = match selector {
            SessionSelector::Index(i) => SessionLedger::delete_session(&mut record, admin, i)?,
            SessionSelector::Id(sid) => SessionLedger::delete_session_by_id(&mut record, admin, sid)?,
        };

        users.save(&mut record)?;
        ttlog_quiet(
            store,
            "del",
            &record.key(),
            &format!("session {} deleted by {}", removed.id, admin.actor()),
        );
        Ok(removed)
    }
}
