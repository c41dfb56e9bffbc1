//! Session and preference persistence configuration.

use serde::{Deserialize, Serialize};

/// Keys under which the client-store collaborator persists state.
///
/// The session record is scoped to one application run; the language
/// preference survives across runs when the backing store does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key for the serialized active-user record.
    #[serde(default = "default_session_key")]
    pub session_key: String,
    /// Key for the two-letter language preference.
    #[serde(default = "default_language_key")]
    pub language_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_key: default_session_key(),
            language_key: default_language_key(),
        }
    }
}

fn default_session_key() -> String {
    "currentUser".to_string()
}

fn default_language_key() -> String {
    "language".to_string()
}
