//! Persisted key/value preferences.
//!
//! The theme flag is the only value this site persists. [`PreferenceStore`] is
//! the seam between the theme state machine and `localStorage`, so the
//! transition logic runs natively against [`MemoryStore`] in tests.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A browser with storage disabled still gets a
//! working toggle for the lifetime of the page; the failed write is logged.

use std::collections::HashMap;

use crate::error::SiteError;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// In-process store. Backs native tests and pages without `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_owned(), value.to_owned());
        Self { values }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the window's `localStorage`. Unavailable storage degrades to a
    /// store that reads nothing and rejects writes.
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
            None => None,
        };
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        let Some(storage) = self.storage.as_ref() else {
            return Err(SiteError::Dom("localStorage unavailable".into()));
        };
        storage.set_item(key, value)?;
        Ok(())
    }
}
