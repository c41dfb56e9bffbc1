//! In-memory client-side key/value store.

use dashmap::DashMap;

use learnhub_core::result::AppResult;
use learnhub_core::traits::ClientStore;

/// Client store keeping values in process memory.
///
/// Stands in for the browser's storage: the session record lives here for
/// one application run. Nothing survives process exit.
#[derive(Debug, Default)]
pub struct MemoryClientStore {
    values: DashMap<String, String>,
}

impl MemoryClientStore {
    /// Create an empty client store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientStore for MemoryClientStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).map(|v| v.clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
