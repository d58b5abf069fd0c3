//! Internal operation log: one JSON object per line in `<data>/audit.log`.

use super::record_store::RecordStore;
use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;
use tracing::warn;

const AUDIT_FILE: &str = "audit.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub date: String, // RFC3339
    pub operation: String,
    pub target: String,
    pub message: String,
}

fn audit_path(store: &RecordStore) -> PathBuf {
    store.base().join(AUDIT_FILE)
}

/// Append a line to the audit log.
pub fn ttlog(store: &RecordStore, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = AuditEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut line = serde_json::to_string(&entry)?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(audit_path(store))?;
    file.write_all(line.as_bytes())?;
    Ok(())
}

/// Same as [`ttlog`], but a failure only produces a warning.
pub fn ttlog_quiet(store: &RecordStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(store, operation, target, message) {
        warn!(operation, target, error = %e, "failed to write audit log");
    }
}

/// All entries, oldest first. Unparseable lines are skipped.
pub fn read_all(store: &RecordStore) -> AppResult<Vec<AuditEntry>> {
    let file = match fs::File::open(audit_path(store)) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut entries = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<AuditEntry>(&line) {
            Ok(e) => entries.push(e),
            Err(e) => warn!(error = %e, "skipping malformed audit line"),
        }
    }
    Ok(entries)
}
