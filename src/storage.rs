/// Persisted open flags: the store seam plus its localStorage and in-memory backends

use crate::error::StoreError;
use std::cell::RefCell;
use std::collections::HashMap;

/// A string key-value store that survives page reloads.
///
/// Methods take `&self` like `web_sys::Storage` does; the store is shared
/// by the restorer and every toggle on the page.
pub trait FlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// True when a flag is stored under `key`. Unreadable counts as absent.
    fn is_flagged(&self, key: &str) -> bool {
        match self.get(key) {
            Ok(value) => value.is_some_and(|v| !v.is_empty()),
            Err(e) => {
                log::warn!("Reading {} failed, treating as closed: {}", key, e);
                false
            }
        }
    }
}

/// `window.localStorage`, or nothing when the host disables it.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; category state will not persist");
        }
        LocalStore { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl FlagStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::rejected("read", key, format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::rejected("write", key, format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StoreError::rejected("remove", key, format!("{:?}", e)))
    }
}

/// In-memory store. `unavailable()` builds one that fails every call,
/// standing in for a browser with storage disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        MemoryStore {
            entries: RefCell::new(HashMap::new()),
            disabled: true,
        }
    }

    /// Sorted snapshot of the stored keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.disabled {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl FlagStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
