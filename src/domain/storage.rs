/// Injected key/value persistence capability.
///
/// The browser implementation sits on localStorage; tests use an in-memory
/// map. Writes are best-effort: a failing store silently drops the value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}
