//! Admin capability.
//!
//! Privileged operations take an `&AdminToken`. A token can only be obtained
//! through one of the checks below, so holding one proves the check ran.

use crate::errors::{AppError, AppResult};
use crate::models::{Settings, UserRecord};
use crate::store::UserStore;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminToken {
    admin_id: Option<u32>,
    restricted: bool,
}

impl AdminToken {
    /// Check `claimed` against the users collection.
    ///
    /// With `restrictAdminAccess` off, a token is issued without checking.
    pub fn authorize(users: &UserStore<'_>, settings: &Settings, claimed: Option<u32>) -> AppResult<Self> {
        if !settings.restrict_admin_access {
            debug!(?claimed, "admin access unrestricted");
            return Ok(Self {
                admin_id: claimed,
                restricted: false,
            });
        }

        let id = claimed.ok_or_else(|| AppError::PermissionDenied("an admin id is required (--admin)".into()))?;

        let user = match users.load(id) {
            Ok(u) => u,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::PermissionDenied(format!("unknown admin id {id}")));
            }
            Err(e) => return Err(e),
        };

        Self::for_admin(&user)
    }

    /// Token for an already loaded user; fails unless the user is an admin.
    pub fn for_admin(user: &UserRecord) -> AppResult<Self> {
        if !user.is_admin() {
            return Err(AppError::PermissionDenied(format!(
                "user {} has level '{}', not admin",
                user.id, user.level
            )));
        }
        Ok(Self {
            admin_id: Some(user.id),
            restricted: true,
        })
    }

    /// Only used to create the very first user of an empty store.
    pub(crate) fn bootstrap() -> Self {
        Self {
            admin_id: None,
            restricted: false,
        }
    }

    pub fn admin_id(&self) -> Option<u32> {
        self.admin_id
    }

    /// Who is acting, for audit lines and export metadata.
    pub fn actor(&self) -> String {
        match (self.admin_id, self.restricted) {
            (Some(id), _) => format!("admin {id}"),
            (None, false) => "admin".to_string(),
            (None, true) => "unknown".to_string(),
        }
    }
}
