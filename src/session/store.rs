//! Durable key-value persistence for the session triple.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only code allowed to touch the durable surface. In
//! the browser that is `window.localStorage`; elsewhere an in-memory map
//! stands in so the controller and route logic run natively under test.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: a backend error reads as anonymous and is logged.
//! Writes are all-or-nothing across the three slots. When one slot is
//! rejected the previous values are put back before the error is returned.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::model::{Session, SessionState, UserId, normalize_optional};

/// Failures of the underlying key-value surface.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage surface exists (private mode, disabled storage, no window).
    #[error("session storage is unavailable")]
    StorageUnavailable,
    /// The surface exists but refused the value (for example, quota exceeded).
    #[error("session storage rejected write to `{key}`")]
    WriteRejected { key: String },
}

/// Minimal string key-value surface the session store is built on.
pub trait StorageBackend {
    /// Read a slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageUnavailable`] if the surface cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a slot.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the surface is missing or refuses the value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a slot. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageUnavailable`] if the surface cannot be reached.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Process-local backend used outside the browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    /// Seed a backend with existing slot values.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Browser `localStorage` backend.
///
/// Holds no handle; the storage object is looked up on each call so the
/// backend stays `Send + Sync` and can live in a `StoredValue`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "csr")]
impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::StorageUnavailable)
    }
}

#[cfg(feature = "csr")]
impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|_| StoreError::StorageUnavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StoreError::WriteRejected { key: key.to_owned() })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        Self::storage()?.remove_item(key).map_err(|_| StoreError::StorageUnavailable)
    }
}

/// Backend used by the running app for the current build target.
#[cfg(feature = "csr")]
pub type DefaultBackend = LocalStorageBackend;
#[cfg(not(feature = "csr"))]
pub type DefaultBackend = MemoryBackend;

/// Names of the three storage slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl StorageKeys {
    /// Keys with a common prefix, e.g. `liftlog.` gives `liftlog.userId`.
    pub fn prefixed(prefix: &str) -> Self {
        let base = Self::default();
        Self {
            id: format!("{prefix}{}", base.id),
            name: format!("{prefix}{}", base.name),
            email: format!("{prefix}{}", base.email),
        }
    }

    fn all(&self) -> [&str; 3] {
        [&self.id, &self.name, &self.email]
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { id: "userId".to_owned(), name: "userName".to_owned(), email: "userEmail".to_owned() }
    }
}

/// Read/write/clear over the three session slots of a backend.
#[derive(Clone, Debug)]
pub struct SessionStore<B> {
    backend: B,
    keys: StorageKeys,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B, keys: StorageKeys) -> Self {
        Self { backend, keys }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current persisted session, or `Anonymous` when none is usable.
    pub fn read(&self) -> SessionState {
        let id = match self.backend.get(&self.keys.id) {
            Ok(raw) => raw.as_deref().and_then(UserId::parse),
            Err(err) => {
                log::warn!("session read failed, treating as anonymous: {err}");
                return SessionState::Anonymous;
            }
        };
        let Some(id) = id else {
            return SessionState::Anonymous;
        };
        SessionState::Authenticated(Session::new(
            id,
            self.read_optional(&self.keys.name),
            self.read_optional(&self.keys.email),
        ))
    }

    /// Persist all three fields or none of them.
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] hit; the slots hold their previous
    /// values afterwards.
    pub fn write(&mut self, session: &Session) -> Result<(), StoreError> {
        let snapshot = self.snapshot()?;
        let values = [Some(session.id().as_str()), session.name(), session.email()];
        let keys = self.keys.clone();
        for (key, value) in keys.all().into_iter().zip(values) {
            if let Err(err) = put(&mut self.backend, key, value) {
                self.restore(&snapshot);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Remove all three slots.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::StorageUnavailable`] if the surface cannot be reached.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        let keys = self.keys.clone();
        for key in keys.all() {
            self.backend.remove(key)?;
        }
        Ok(())
    }

    fn read_optional(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(raw) => normalize_optional(raw),
            Err(err) => {
                log::warn!("session field `{key}` unreadable: {err}");
                None
            }
        }
    }

    fn snapshot(&self) -> Result<[Option<String>; 3], StoreError> {
        let [id, name, email] = self.keys.all();
        Ok([self.backend.get(id)?, self.backend.get(name)?, self.backend.get(email)?])
    }

    fn restore(&mut self, snapshot: &[Option<String>; 3]) {
        let keys = self.keys.clone();
        for (key, value) in keys.all().into_iter().zip(snapshot) {
            if let Err(err) = put(&mut self.backend, key, value.as_deref()) {
                log::warn!("failed to roll back session field `{key}`: {err}");
            }
        }
    }
}

fn put<B: StorageBackend>(backend: &mut B, key: &str, value: Option<&str>) -> Result<(), StoreError> {
    match value {
        Some(value) => backend.set(key, value),
        None => backend.remove(key),
    }
}
