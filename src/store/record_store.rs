//! One-JSON-file-per-record persistence.
//!
//! Layout: `<base>/<collection>/<key>.json`. The empty collection name maps
//! to `<base>` itself (used by `settings.json`).

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const EXT: &str = "json";
const TMP_EXT: &str = "json.tmp";

#[derive(Debug, Clone)]
pub struct RecordStore {
    base: PathBuf,
}

impl RecordStore {
    /// Open (and create if needed) the store rooted at `base`.
    pub fn open(base: impl Into<PathBuf>) -> AppResult<Self> {
        let base = base.into();
        fs::create_dir_all(&base)?;
        debug!(base = %base.display(), "record store opened");
        Ok(Self { base })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn ensure_collection(&self, collection: &str) -> AppResult<()> {
        let dir = self.collection_dir(collection)?;
        fs::create_dir_all(&dir)?;
        Ok(())
    }

    pub fn exists(&self, collection: &str, key: &str) -> bool {
        self.record_path(collection, key)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    /// Write a new record. Fails with `AlreadyExists` if the key is taken;
    /// the existing file is left untouched. The collection is created on
    /// first use.
    pub fn create<T: Serialize>(&self, collection: &str, key: &str, value: &T) -> AppResult<()> {
        let path = self.record_path(collection, key)?;
        self.ensure_collection(collection)?;
        let bytes = serde_json::to_vec(value)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| AppError::from_record_io(e, label(collection, key)))?;

        if let Err(e) = file.write_all(&bytes).and_then(|_| file.sync_all()) {
            drop(file);
            // a half-written new record is worse than none
            if let Err(rm) = fs::remove_file(&path) {
                warn!(path = %path.display(), error = %rm, "could not remove partial record");
            }
            return Err(AppError::Io(e));
        }

        debug!(collection, key, bytes = bytes.len(), "record created");
        Ok(())
    }

    /// Read and deserialize a record. Absent or empty files are `NotFound`.
    pub fn read<T: DeserializeOwned>(&self, collection: &str, key: &str) -> AppResult<T> {
        let path = self.record_path(collection, key)?;
        let content =
            fs::read_to_string(&path).map_err(|e| AppError::from_record_io(e, label(collection, key)))?;

        if content.trim().is_empty() {
            return Err(AppError::NotFound(label(collection, key)));
        }

        serde_json::from_str(&content).map_err(|e| AppError::Malformed {
            key: label(collection, key),
            reason: e.to_string(),
        })
    }

    /// Replace an existing record as a whole. Never creates.
    ///
    /// The new content goes to a sibling `.tmp` file that is then renamed
    /// over the record, so a failed write leaves the old content in place.
    pub fn update<T: Serialize>(&self, collection: &str, key: &str, value: &T) -> AppResult<()> {
        let path = self.record_path(collection, key)?;
        let bytes = serde_json::to_vec(value)?;

        fs::metadata(&path).map_err(|e| AppError::from_record_io(e, label(collection, key)))?;

        let tmp = path.with_extension(TMP_EXT);
        let written = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp)
            .and_then(|mut file| {
                file.write_all(&bytes)?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&tmp, &path));

        if let Err(e) = written {
            if let Err(rm) = fs::remove_file(&tmp)
                && rm.kind() != std::io::ErrorKind::NotFound
            {
                warn!(path = %tmp.display(), error = %rm, "could not remove temporary record");
            }
            return Err(AppError::Io(e));
        }

        debug!(collection, key, bytes = bytes.len(), "record updated");
        Ok(())
    }

    pub fn delete(&self, collection: &str, key: &str) -> AppResult<()> {
        let path = self.record_path(collection, key)?;
        fs::remove_file(&path).map_err(|e| AppError::from_record_io(e, label(collection, key)))?;
        debug!(collection, key, "record deleted");
        Ok(())
    }

    /// Keys present in `collection`, sorted. Non-JSON entries are ignored.
    pub fn list(&self, collection: &str) -> AppResult<Vec<String>> {
        let dir = self.collection_dir(collection)?;
        let entries = fs::read_dir(&dir).map_err(|e| AppError::from_record_io(e, collection_label(collection)))?;

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }

    fn collection_dir(&self, collection: &str) -> AppResult<PathBuf> {
        if collection.is_empty() {
            return Ok(self.base.clone());
        }
        validate_key(collection)?;
        Ok(self.base.join(collection))
    }

    fn record_path(&self, collection: &str, key: &str) -> AppResult<PathBuf> {
        validate_key(key)?;
        Ok(self.collection_dir(collection)?.join(format!("{key}.{EXT}")))
    }
}

/// Keys become file names: no separators, no dot-only names.
fn validate_key(key: &str) -> AppResult<()> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0'])
        || key.trim() != key;

    if bad {
        Err(AppError::InvalidKey(key.to_string()))
    } else {
        Ok(())
    }
}

fn label(collection: &str, key: &str) -> String {
    if collection.is_empty() {
        key.to_string()
    } else {
        format!("{collection}/{key}")
    }
}

fn collection_label(collection: &str) -> String {
    if collection.is_empty() {
        "<root>".to_string()
    } else {
        collection.to_string()
    }
}
