// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::fs;
use std::path::Path;

/// Prepare `path` for writing.
///
/// La directory padre viene creata se manca. An existing file is replaced
/// only with `force` or after the user confirms.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    if force || !path.exists() {
        return Ok(());
    }

    if confirm(format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "export cancelled: {} not overwritten",
            path.display()
        )))
    }
}
