//! Caller context carrying the identity behind a service call.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use learnhub_entity::user::{User, UserRole};

/// Context for the user performing an operation.
///
/// Built by the UI surface from the active session and passed into
/// service methods so that every mutation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerContext {
    /// The acting user's ID.
    pub user_id: Uuid,
    /// The acting user's username (convenience for log fields).
    pub username: String,
    /// The acting user's role.
    pub role: UserRole,
}

impl CallerContext {
    /// Creates a new caller context.
    pub fn new(user_id: Uuid, username: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            username: username.into(),
            role,
        }
    }

    /// Returns whether the caller is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns whether the caller is a teacher.
    pub fn is_teacher(&self) -> bool {
        matches!(self.role, UserRole::Teacher)
    }

    /// Returns whether the caller may manage lessons.
    pub fn can_manage_lessons(&self) -> bool {
        self.role.can_manage_lessons()
    }
}

impl From<&User> for CallerContext {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.username.clone(), user.role)
    }
}
