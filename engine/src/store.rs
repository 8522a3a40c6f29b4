//! Keyed JSON persistence
//!
//! One JSON document per logical table, written best-effort under a data
//! directory. `load` falls back to the caller's default on an absent or
//! unparseable blob; `save` never propagates failure, so a full disk or a
//! bad path cannot crash a mutation that already applied in memory. There
//! is no schema versioning: a structurally incompatible blob simply fails
//! to parse and yields the default.

use std::fs;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

/// Handle to the per-table JSON store
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store rooted at `dir`, creating the directory if possible
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Could not create data directory {}: {}", dir.display(), e);
        }
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Load the document stored under `key`, or `default` when the blob is
    /// absent or fails to parse
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return default,
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Discarding unparseable blob for key {}: {}", key, e);
                default
            }
        }
    }

    /// Serialize and store `value` under `key`, best-effort
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Could not serialize value for key {}: {}", key, e);
                return;
            }
        };
        if let Err(e) = fs::write(self.path(key), raw) {
            tracing::warn!("Could not persist key {}: {}", key, e);
        }
    }
}
