//! Typed session record with a single read path and a single write path.

use crate::{SessionError, Store};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::warn;

/// A single persisted session record of type `T`.
///
/// All reads go through [`Session::load`] and all writes through
/// [`Session::save`], so there is exactly one place a stale or conflicting
/// record could come from.
#[derive(Debug)]
pub struct Session<T> {
    store: Store,
    key: String,
    _phantom: PhantomData<T>,
}

impl<T> Session<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a session over `store`, keyed by `key`.
    pub fn new(store: Store, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _phantom: PhantomData,
        }
    }

    /// Load the persisted record.
    ///
    /// Missing, unreadable and malformed records all load as `None`: a bad
    /// record must never block the caller, only cost it the persisted state.
    pub fn load(&self) -> Option<T> {
        match self.store.get(&self.key) {
            Ok(record) => record,
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding unreadable session record");
                None
            }
        }
    }

    /// Persist `record`, replacing any previous one.
    pub fn save(&self, record: &T) -> Result<(), SessionError> {
        self.store.set(&self.key, record)
    }

    /// Remove the persisted record, if any.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.delete(&self.key)
    }
}
