//! Durable client storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists through the [`SessionStorage`] trait so the same
//! write-through logic runs against `window.localStorage` in the browser and
//! against an in-memory map during SSR and native tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors produced by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available in this environment")]
    Unavailable,

    #[error("storage backend failed: {0}")]
    Backend(String),

    #[error("stored value is malformed: {0}")]
    Malformed(String),
}

/// Key/value string storage with synchronous reads and writes.
pub trait SessionStorage {
    /// Read the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage used by the running build: `localStorage` when hydrating in the
/// browser, memory otherwise.
#[cfg(feature = "hydrate")]
pub type BrowserStorage = LocalStorage;
#[cfg(not(feature = "hydrate"))]
pub type BrowserStorage = MemoryStorage;

/// Shared in-memory storage. Clones see the same contents.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Backend(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `window.localStorage`, looked up on every call.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl SessionStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

/// Load a JSON value stored under `key`. An absent key is `Ok(None)`.
///
/// # Errors
///
/// Returns [`StorageError::Malformed`] if the stored text does not decode as
/// `T`, or the backend's error if the read fails.
pub fn load_json<T: DeserializeOwned>(storage: &impl SessionStorage, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.read(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some).map_err(|e| StorageError::Malformed(e.to_string()))
}

/// Save a JSON value under `key`.
///
/// # Errors
///
/// Returns a [`StorageError`] if serialization or the backend write fails.
pub fn save_json<T: Serialize>(storage: &impl SessionStorage, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Backend(e.to_string()))?;
    storage.write(key, &raw)
}
