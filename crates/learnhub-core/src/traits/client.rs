//! Client-side key/value persistence trait.

use crate::result::AppResult;

/// Trait for the client storage collaborator.
///
/// Models the browser's session/local storage: string values under fixed
/// keys. The active-user record and the language preference both go
/// through this trait so the identity layer never knows where they land.
pub trait ClientStore: Send + Sync + std::fmt::Debug + 'static {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the value stored under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> AppResult<()>;
}
