//! In-memory blob store.

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use learnhub_core::result::AppResult;
use learnhub_core::traits::BlobStore;

/// Scheme prefix of locators issued by [`MemoryBlobStore`].
const LOCATOR_SCHEME: &str = "mem://";

/// Blob store keeping every upload in process memory.
///
/// `store` completes synchronously and issues an opaque `mem://<uuid>`
/// locator; there is no retry or partial-failure path. A real deployment
/// swaps this for a network-backed provider without touching the
/// submission workflow.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: DashMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    /// Create an empty blob store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    fn store(&self, data: Vec<u8>) -> AppResult<String> {
        let locator = format!("{LOCATOR_SCHEME}{}", Uuid::new_v4());
        debug!(locator = %locator, size = data.len(), "Stored blob");
        self.blobs.insert(locator.clone(), data);
        Ok(locator)
    }

    fn exists(&self, locator: &str) -> AppResult<bool> {
        Ok(self.blobs.contains_key(locator))
    }

    fn read(&self, locator: &str) -> AppResult<Option<Vec<u8>>> {
        Ok(self.blobs.get(locator).map(|b| b.clone()))
    }
}
