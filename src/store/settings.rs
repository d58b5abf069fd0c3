//! `settings.json` persistence.

use super::record_store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::Settings;
use std::path::PathBuf;

const SETTINGS_KEY: &str = "settings";

/// Load settings, falling back to defaults when the file does not exist.
pub fn load(store: &RecordStore) -> AppResult<Settings> {
    match store.read("", SETTINGS_KEY) {
        Ok(s) => Ok(s),
        Err(AppError::NotFound(_)) => Ok(Settings::default()),
        Err(e) => Err(e),
    }
}

pub fn save(store: &RecordStore, settings: &Settings) -> AppResult<()> {
    if store.exists("", SETTINGS_KEY) {
        store.update("", SETTINGS_KEY, settings)
    } else {
        store.create("", SETTINGS_KEY, settings)
    }
}

/// Write defaults unless a settings file is already present.
pub fn init(store: &RecordStore) -> AppResult<bool> {
    match store.create("", SETTINGS_KEY, &Settings::default()) {
        Ok(()) => Ok(true),
        Err(AppError::AlreadyExists(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Directory exports are written to.
pub fn export_dir(store: &RecordStore, settings: &Settings) -> PathBuf {
    if settings.save_data_path.trim().is_empty() {
        store.base().join("exports")
    } else {
        crate::utils::path::resolve_under(store.base(), settings.save_data_path.trim())
    }
}
