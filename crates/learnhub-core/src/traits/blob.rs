//! Blob storage trait for pluggable upload backends.

use crate::result::AppResult;

/// Trait for the file-upload collaborator.
///
/// The submission workflow hands over raw bytes and receives an opaque
/// locator string it stores on the submission record. The in-process
/// implementation lives in `learnhub-storage`; a real deployment can
/// swap in a network backend without changing the workflow's contract.
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "memory").
    fn provider_type(&self) -> &str;

    /// Store a blob and return its locator.
    fn store(&self, data: Vec<u8>) -> AppResult<String>;

    /// Check whether a blob exists at the given locator.
    fn exists(&self, locator: &str) -> AppResult<bool>;

    /// Read a blob back into memory.
    fn read(&self, locator: &str) -> AppResult<Option<Vec<u8>>>;
}
