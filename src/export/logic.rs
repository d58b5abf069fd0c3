// src/export/logic.rs

use crate::core::admin::AdminToken;
use crate::core::summary::Timesheet;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::timesheet_rows;
use crate::export::range::parse_period;
use crate::export::xlsx::export_xlsx;
use crate::store::audit::ttlog_quiet;
use crate::store::{RecordStore, UserStore, settings};
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export del timesheet di un utente.
    ///
    /// - `file`: path assoluto del file di output; default
    ///   `<saveDataPath>/<First Last - id>.<ext>`
    /// - `range`: `None`, `"all"`, `YYYY`, `YYYY-MM`, `YYYY-MM-DD` oppure
    ///   `start:end`
    ///
    /// Returns the written path, or `None` when no closed session matched.
    pub fn export(
        store: &RecordStore,
        admin: &AdminToken,
        user_id: u32,
        format: ExportFormat,
        file: Option<&str>,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let bounds = parse_period(range)?;
        let record = UserStore::new(store).load(user_id)?;
        let title = record.title();

        let path = match file {
            Some(f) => {
                let p = PathBuf::from(f);
                if !p.is_absolute() {
                    return Err(AppError::Export(format!("Output file path must be absolute: {f}")));
                }
                p
            }
            None => {
                let cfg = settings::load(store)?;
                default_path(&settings::export_dir(store, &cfg), &title, format)
            }
        };

        let sheet = Timesheet::build(&record, bounds);
        let rows = timesheet_rows(&sheet);

        if rows.is_empty() {
            warning("⚠️  No closed sessions found for selected range.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Xlsx => export_xlsx(&rows, &path, &title, &admin.actor())?,
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog_quiet(
            store,
            "export",
            &record.key(),
            &format!("{} rows to {} by {}", rows.len() - 1, path.display(), admin.actor()),
        );
        Ok(Some(path))
    }
}

fn default_path(dir: &Path, title: &str, format: ExportFormat) -> PathBuf {
    dir.join(format!("{}.{}", sanitize(title), format.as_str()))
}

/// Keep file names portable.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}
