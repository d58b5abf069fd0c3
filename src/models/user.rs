use super::level::Level;
use super::session::WorkSession;
use crate::utils::formatting::display_name;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Mirrors whether the user currently has an open session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFlag {
    pub status: bool,
}

/// One employee or admin, persisted as `users/<id>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u32,
    pub level: Level,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub created: String, // RFC3339
    #[serde(default)]
    pub session: SessionFlag,
    #[serde(default)]
    pub data: Vec<WorkSession>,
    #[serde(default)]
    pub revision: u64,
}

impl UserRecord {
    pub fn new(id: u32, first_name: &str, last_name: &str, level: Level) -> Self {
        Self {
            id,
            level,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            created: Local::now().to_rfc3339(),
            session: SessionFlag::default(),
            data: Vec::new(),
            revision: 0,
        }
    }

    /// Record key (file stem) for this user.
    pub fn key(&self) -> String {
        self.id.to_string()
    }

    pub fn display_name(&self) -> String {
        display_name(&self.first_name, &self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.level.is_admin()
    }

    pub fn is_clocked_in(&self) -> bool {
        self.session.status
    }

    pub fn open_count(&self) -> usize {
        self.data.iter().filter(|s| s.is_open()).count()
    }

    pub fn open_session(&self) -> Option<&WorkSession> {
        self.data.iter().find(|s| s.is_open())
    }

    pub fn open_session_mut(&mut self) -> Option<&mut WorkSession> {
        self.data.iter_mut().find(|s| s.is_open())
    }

    /// `session.status` holds iff exactly one session is open.
    pub fn status_consistent(&self) -> bool {
        self.session.status == (self.open_count() == 1)
    }

    /// Re-derive `session.status` from `data`: clocked in while any session
    /// is open. Returns true when it changed.
    pub fn sync_status(&mut self) -> bool {
        let derived = self.open_count() > 0;
        let changed = self.session.status != derived;
        self.session.status = derived;
        changed
    }

    /// Header used for exports and titles: `First Last - 12345`.
    pub fn title(&self) -> String {
        format!("{} - {}", self.display_name(), self.id)
    }
}
