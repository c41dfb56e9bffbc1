//! The single active session and its persisted record.

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use learnhub_core::result::AppResult;
use learnhub_core::traits::ClientStore;
use learnhub_entity::user::User;

/// The application's one active session.
///
/// Holds the logged-in user in memory and mirrors it into the client
/// store under a fixed key, the way the browser app mirrored the current
/// user into session storage. There is exactly one logical actor, so a
/// plain `RwLock` around the slot is all the coordination needed.
#[derive(Debug)]
pub struct ActiveSession {
    slot: RwLock<Option<User>>,
    client: Arc<dyn ClientStore>,
    session_key: String,
}

impl ActiveSession {
    /// Creates an empty session backed by the given client store.
    pub fn new(client: Arc<dyn ClientStore>, session_key: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(None),
            client,
            session_key: session_key.into(),
        }
    }

    /// The currently logged-in user, if any.
    pub fn current(&self) -> Option<User> {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Whether the active user is an admin.
    pub fn is_admin(&self) -> bool {
        self.current().is_some_and(|u| u.is_admin())
    }

    /// Whether the active user is a teacher.
    pub fn is_teacher(&self) -> bool {
        self.current().is_some_and(|u| u.is_teacher())
    }

    /// Sets the active user and persists the session record.
    pub fn set(&self, user: User) -> AppResult<()> {
        let record = serde_json::to_string(&user)?;
        self.client.set(&self.session_key, &record)?;
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(user);
        Ok(())
    }

    /// Clears the active user and removes the persisted record.
    pub fn clear(&self) -> AppResult<()> {
        self.client.remove(&self.session_key)?;
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }

    /// Rehydrates the session from the persisted record, if present.
    ///
    /// An unreadable record is treated as no session rather than an
    /// error: the user simply has to log in again.
    pub fn restore(&self) -> AppResult<Option<User>> {
        let Some(record) = self.client.get(&self.session_key)? else {
            return Ok(None);
        };
        match serde_json::from_str::<User>(&record) {
            Ok(user) => {
                debug!(username = %user.username, "Session restored");
                *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(user.clone());
                Ok(Some(user))
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable session record");
                self.client.remove(&self.session_key)?;
                Ok(None)
            }
        }
    }

    /// Refreshes the session copy when the given record belongs to the
    /// active user.
    pub fn refresh_if_current(&self, user: &User) -> AppResult<()> {
        let is_current = self
            .current()
            .is_some_and(|current| current.id == user.id);
        if is_current {
            self.set(user.clone())?;
        }
        Ok(())
    }
}
