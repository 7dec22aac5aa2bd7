//! Preference Storage
//!
//! Key-value persistence behind a trait so the theme controller can be
//! driven by `localStorage` in the browser and a map in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{js_message, UiError};

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        (**self).set(key, value)
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        (**self).set(key, value)
    }
}

/// Browser `localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// `Ok(None)` when storage is disabled (private mode, sandboxed frames)
    pub fn open() -> Result<Option<Self>, UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let storage = window
            .local_storage()
            .map_err(|e| UiError::Storage(js_message(&e)))?;
        Ok(storage.map(|storage| Self { storage }))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| UiError::Storage(js_message(&e)))
    }
}

/// In-memory store; also the fallback when `localStorage` is unavailable
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Open `localStorage`, falling back to memory
pub fn browser_store() -> Box<dyn PreferenceStore> {
    match LocalStorage::open() {
        Ok(Some(store)) => Box::new(store),
        Ok(None) => {
            log::debug!("[PREFS] localStorage disabled, keeping preferences in memory");
            Box::new(MemoryStore::default())
        }
        Err(e) => {
            log::warn!("[PREFS] {}, keeping preferences in memory", e);
            Box::new(MemoryStore::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Some("dark".to_string()));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme"), Some("light".to_string()));
    }
}
