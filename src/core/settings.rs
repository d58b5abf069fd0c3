use crate::core::admin::AdminToken;
use crate::errors::AppResult;
use crate::models::Settings;
use crate::store::RecordStore;
use crate::store::audit::ttlog_quiet;
use crate::store::settings;

pub struct SettingsLogic;

impl SettingsLogic {
    /// Change the export path and/or the admin restriction.
    pub fn update(
        store: &RecordStore,
        admin: &AdminToken,
        save_data_path: Option<&str>,
        restrict_admin_access: Option<bool>,
    ) -> AppResult<Settings> {
        let mut current = settings::load(store)?;

        if let Some(p) = save_data_path {
            current.save_data_path = p.trim().to_string();
        }
        if let Some(r) = restrict_admin_access {
            current.restrict_admin_access = r;
        }

        settings::save(store, &current)?;
        ttlog_quiet(
            store,
            "settings",
            "settings",
            &format!(
                "saveDataPath='{}' restrictAdminAccess={} by {}",
                current.save_data_path,
                current.restrict_admin_access,
                admin.actor()
            ),
        );
        Ok(current)
    }
}
