//! Durable key-value backends for session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only talks to `SessionStorage`. Browser builds persist to
//! `localStorage`; tests and non-browser hosts use `MemoryStorage`.
//!
//! TRADE-OFFS
//! ==========
//! `BrowserStorage` resolves the `Storage` handle on every call instead of
//! caching it, so the backend stays `Send + Sync` and can live inside a
//! Leptos signal. SSR builds report the backend as unavailable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Failure reading or writing durable session data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend could not be reached (disabled, quota, no window).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A persisted entry exists but cannot be decoded.
    #[error("malformed session data: {0}")]
    Malformed(String),
}

/// Synchronous string key-value store scoped to the current origin.
pub trait SessionStorage {
    /// Read `key`, returning `Ok(None)` when it is not set.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the write is refused.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|_| StorageError::Unavailable("localStorage access denied".to_owned()))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Unavailable(format!("read {key} failed")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(not_in_browser())
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|_| StorageError::Unavailable(format!("write {key} failed")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(not_in_browser())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Unavailable(format!("remove {key} failed")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(not_in_browser())
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_in_browser() -> StorageError {
    StorageError::Unavailable("not running in a browser".to_owned())
}

/// Process-local backend. Clones share the same entries, which lets a test
/// hand one clone to a store and inspect or reuse another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    unavailable: bool,
    rejected_key: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that refuses every operation, like `localStorage` disabled
    /// by browser policy.
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    /// Refuse writes to `key` only, as a full quota would for a large value.
    #[must_use]
    pub fn rejecting_writes_to(mut self, key: &str) -> Self {
        self.rejected_key = Some(key.to_owned());
        self
    }

    /// Copy of the current entries.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> Result<R, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("memory backend disabled".to_owned()));
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory backend poisoned".to_owned()))?;
        Ok(f(&mut entries))
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_entries(|e| e.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.rejected_key.as_deref() == Some(key) {
            return Err(StorageError::Unavailable(format!("quota exceeded writing {key}")));
        }
        self.with_entries(|e| {
            e.insert(key.to_owned(), value.to_owned());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_entries(|e| {
            e.remove(key);
        })
    }
}
