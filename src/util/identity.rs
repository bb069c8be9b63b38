//! Durable per-visitor identifier.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend correlates a visitor's turns by the id sent as `requestID`.
//! The id is created once per browser profile and stored in `localStorage`
//! under a fixed key. When storage is missing or refuses the write, the
//! freshly generated id is used for this page load only.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::cell::RefCell;
use std::collections::HashMap;

pub const VISITOR_PREFIX: &str = "user_";
pub const VISITOR_SUFFIX_LEN: usize = 9;

/// Opaque visitor identifier, `user_` followed by 9 base-36 digits when generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitorId(String);

impl VisitorId {
    /// Generate a new id from a v4 UUID's random bits.
    #[must_use]
    pub fn generate() -> Self {
        Self::from_seed(uuid::Uuid::new_v4().as_u128())
    }

    fn from_seed(seed: u128) -> Self {
        Self(format!("{VISITOR_PREFIX}{}", base36_suffix(seed)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Render the low digits of `seed` as a fixed-width lowercase base-36 string.
fn base36_suffix(mut seed: u128) -> String {
    let mut digits = Vec::with_capacity(VISITOR_SUFFIX_LEN);
    for _ in 0..VISITOR_SUFFIX_LEN {
        let digit = u32::try_from(seed % 36).unwrap_or_default();
        digits.push(char::from_digit(digit, 36).unwrap_or('0'));
        seed /= 36;
    }
    digits.iter().rev().collect()
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend exists (private mode, sandboxed iframe, no window).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the write (quota, security policy).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the value could not be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, used when the browser offers none and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(feature = "csr")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "csr")]
impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// Return the stored visitor id, or create, store, and return a new one.
///
/// A stored value is returned unchanged; blank values count as absent.
pub fn visitor_id_or_create(store: &impl KeyValueStore, key: &str) -> VisitorId {
    if let Some(existing) = store.get(key).filter(|v| !v.trim().is_empty()) {
        return VisitorId(existing);
    }

    let id = VisitorId::generate();
    match store.set(key, id.as_str()) {
        Ok(()) => log::debug!("identity: created visitor id under {key}"),
        Err(e) => log::warn!("identity: {e}; using an ephemeral visitor id"),
    }
    id
}
