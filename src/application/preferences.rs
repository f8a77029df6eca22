use crate::domain::storage::KeyValueStore;

/// Storage key for the theme preference flag
pub const THEME_STORAGE_KEY: &str = "darkMode";

/// Dark mode defaults to on, like the original board.
pub fn load_dark_mode(store: &dyn KeyValueStore) -> bool {
    store
        .get(THEME_STORAGE_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or(true)
}

pub fn persist_dark_mode(store: &dyn KeyValueStore, dark: bool) {
    store.set(THEME_STORAGE_KEY, if dark { "true" } else { "false" });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;

    #[test]
    fn defaults_to_dark() {
        let store = MemoryStore::new();
        assert!(load_dark_mode(&store));
    }

    #[test]
    fn round_trips_preference() {
        let store = MemoryStore::new();
        persist_dark_mode(&store, false);
        assert!(!load_dark_mode(&store));
        persist_dark_mode(&store, true);
        assert!(load_dark_mode(&store));
    }

    #[test]
    fn corrupt_value_falls_back_to_dark() {
        let store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "maybe");
        assert!(load_dark_mode(&store));
    }
}
