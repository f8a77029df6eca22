use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::logging::LogComponent;
use crate::domain::storage::KeyValueStore;
use crate::log_warn;

/// localStorage-backed store. Survives reloads; a blocked or missing
/// storage area degrades to a no-op.
#[derive(Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log_warn!(
                        LogComponent::Infrastructure("LocalStorage"),
                        "Failed to persist key '{}'",
                        key
                    );
                }
            }
            None => {
                log_warn!(
                    LogComponent::Infrastructure("LocalStorage"),
                    "localStorage unavailable, state will not survive reload"
                );
            }
        }
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }
}
