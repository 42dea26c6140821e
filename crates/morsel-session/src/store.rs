//! JSON record store.
//!
//! One record per key, serialized as JSON. Two backends: an in-memory map
//! for tests and short-lived hosts, and a directory of `<key>.json` files
//! for persistence across sessions.

use crate::SessionError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug)]
enum Backend {
    Memory(Mutex<HashMap<String, String>>),
    Dir(PathBuf),
}

/// A key-value store of JSON records.
#[derive(Debug)]
pub struct Store {
    backend: Backend,
}

impl Store {
    /// Open an in-memory store. Records vanish when the store is dropped.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Mutex::new(HashMap::new())),
        }
    }

    /// Open a file-backed store rooted at `dir`, creating it if needed.
    ///
    /// Each key is stored as `<dir>/<key>.json`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            backend: Backend::Dir(dir),
        })
    }

    /// Read and parse the record stored under `key`.
    ///
    /// A missing record is `Ok(None)`; an unreadable or unparsable one is an
    /// error the caller decides how to tolerate.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        let raw = match &self.backend {
            Backend::Memory(map) => map
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .get(key)
                .cloned(),
            Backend::Dir(dir) => match fs::read_to_string(Self::record_path(dir, key)) {
                Ok(contents) => Some(contents),
                Err(e) if e.kind() == ErrorKind::NotFound => None,
                Err(e) => return Err(e.into()),
            },
        };
        match raw {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(SessionError::Malformed),
            None => Ok(None),
        }
    }

    /// Serialize `value` and store it under `key`, replacing any previous
    /// record.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        let raw = serde_json::to_string(value).map_err(SessionError::Serialize)?;
        match &self.backend {
            Backend::Memory(map) => {
                map.lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .insert(key.to_string(), raw);
            }
            Backend::Dir(dir) => {
                fs::write(Self::record_path(dir, key), raw)?;
            }
        }
        Ok(())
    }

    /// Remove the record stored under `key`, if any.
    pub fn delete(&self, key: &str) -> Result<(), SessionError> {
        match &self.backend {
            Backend::Memory(map) => {
                map.lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .remove(key);
            }
            Backend::Dir(dir) => match fs::remove_file(Self::record_path(dir, key)) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            },
        }
        Ok(())
    }

    /// Check whether a record exists under `key`.
    pub fn exists(&self, key: &str) -> Result<bool, SessionError> {
        match &self.backend {
            Backend::Memory(map) => Ok(map
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .contains_key(key)),
            Backend::Dir(dir) => Ok(Self::record_path(dir, key).exists()),
        }
    }

    fn record_path(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{key}.json"))
    }
}
