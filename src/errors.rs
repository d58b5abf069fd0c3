//! Unified application error type.
//! All modules (store, core, cli, utils, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid record key: '{0}'")]
    InvalidKey(String),

    #[error("Malformed record {key}: {reason}")]
    Malformed { key: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record {key} was modified concurrently (expected revision {expected}, found {found})")]
    Conflict {
        key: String,
        expected: u64,
        found: u64,
    },

    #[error("No free identifier left ({0} ids already in use)")]
    IdSpaceExhausted(usize),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for malformed date/time input.
    pub fn is_format_error(&self) -> bool {
        matches!(self, AppError::InvalidDate(_) | AppError::InvalidTime(_))
    }

    /// Map an io::Error for a single record onto the store taxonomy.
    pub(crate) fn from_record_io(err: io::Error, what: impl Into<String>) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => AppError::NotFound(what.into()),
            io::ErrorKind::AlreadyExists => AppError::AlreadyExists(what.into()),
            _ => AppError::Io(err),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
