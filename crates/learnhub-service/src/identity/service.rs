//! User roster operations with role-gated mutation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_core::traits::ClientStore;
use learnhub_entity::user::{CreateUser, UpdateUser, User, UserRole};
use learnhub_store::UserStore;

use crate::context::CallerContext;

use super::session::ActiveSession;

/// Manages the user roster and the active session.
#[derive(Debug)]
pub struct IdentityService {
    /// User roster.
    users: Arc<UserStore>,
    /// The single active session.
    session: ActiveSession,
    /// The undeletable primary admin account, once seeded.
    primary_admin_id: Option<Uuid>,
}

/// Request to create a new user account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Desired username.
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
    /// Assigned role.
    pub role: UserRole,
    /// Full name (optional, any role).
    pub full_name: Option<String>,
    /// Subject area (teachers only; stripped otherwise).
    pub subject_area: Option<String>,
    /// Student number (students only; stripped otherwise).
    pub student_number: Option<String>,
    /// Contact email (students only; stripped otherwise).
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// Contact phone (students only; stripped otherwise).
    pub phone: Option<String>,
}

impl IdentityService {
    /// Creates a new identity service.
    pub fn new(
        users: Arc<UserStore>,
        client: Arc<dyn ClientStore>,
        session_key: impl Into<String>,
        primary_admin_id: Option<Uuid>,
    ) -> Self {
        Self {
            users,
            session: ActiveSession::new(client, session_key),
            primary_admin_id,
        }
    }

    /// The active session.
    pub fn session(&self) -> &ActiveSession {
        &self.session
    }

    /// Attempts to log in with the given credentials.
    ///
    /// The username is matched case-insensitively, the password exactly.
    /// On success the session is set and persisted; on failure nothing
    /// changes and `false` is returned.
    pub fn login(&self, username: &str, password: &str) -> AppResult<bool> {
        let matched = self
            .users
            .find_by_username(username)
            .filter(|u| u.password == password);

        match matched {
            Some(user) => {
                info!(username = %user.username, role = %user.role, "User logged in");
                self.session.set(user)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Logs out, clearing the session and its persisted record.
    pub fn logout(&self) -> AppResult<()> {
        if let Some(user) = self.session.current() {
            info!(username = %user.username, "User logged out");
        }
        self.session.clear()
    }

    /// Rehydrates the session from the persisted record on startup.
    pub fn restore_session(&self) -> AppResult<Option<User>> {
        self.session.restore()
    }

    /// Creates a new user account. Admin only.
    ///
    /// Role-inapplicable optional fields are stripped: subject area is
    /// kept for teachers only (who also start with a zero rating), the
    /// student number, email, and phone for students only.
    pub fn add_user(&self, caller: &CallerContext, req: CreateUserRequest) -> AppResult<User> {
        if !caller.is_admin() {
            return Err(AppError::authorization("Only admins can add users"));
        }

        req.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        if self.users.username_taken(&req.username) {
            return Err(AppError::conflict(format!(
                "Username '{}' is already taken",
                req.username
            )));
        }

        let user = User::from(CreateUser {
            username: req.username,
            password: req.password,
            role: req.role,
            full_name: req.full_name,
            subject_area: req.subject_area,
            student_number: req.student_number,
            email: req.email,
            phone: req.phone,
        });

        info!(
            caller = %caller.username,
            username = %user.username,
            role = %user.role,
            "User created"
        );

        self.users.insert(user.clone());
        Ok(user)
    }

    /// Merges a partial update into a user record.
    ///
    /// Allowed for admins and for the user updating their own record.
    /// If the updated record belongs to the active session's user, the
    /// persisted session copy is refreshed.
    pub fn update_user(
        &self,
        caller: &CallerContext,
        id: Uuid,
        updates: UpdateUser,
    ) -> AppResult<User> {
        if !caller.is_admin() && caller.user_id != id {
            return Err(AppError::authorization(
                "You do not have permission to update this user",
            ));
        }

        let mut user = self
            .users
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if let Some(new_username) = updates.username.as_deref() {
            let taken_by_other = self
                .users
                .find_by_username(new_username)
                .is_some_and(|existing| existing.id != id);
            if taken_by_other {
                return Err(AppError::conflict(format!(
                    "Username '{new_username}' is already taken"
                )));
            }
        }

        user.apply(updates);
        self.users.replace(user.clone());
        self.session.refresh_if_current(&user)?;

        info!(caller = %caller.username, username = %user.username, "User updated");

        Ok(user)
    }

    /// Deletes a user. Admin only; the primary admin is undeletable.
    ///
    /// Deletion does not cascade: lessons and submissions referencing the
    /// user keep their ids and resolve to placeholders at read time.
    pub fn delete_user(&self, caller: &CallerContext, id: Uuid) -> AppResult<()> {
        if !caller.is_admin() {
            return Err(AppError::authorization("Only admins can delete users"));
        }

        if self.primary_admin_id == Some(id) {
            return Err(AppError::guard(
                "The primary admin account cannot be deleted",
            ));
        }

        let removed = self
            .users
            .remove(id)
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(caller = %caller.username, username = %removed.username, "User deleted");

        Ok(())
    }

    /// Looks up a user by ID. Absence is not an error.
    pub fn get_user_by_id(&self, id: Uuid) -> Option<User> {
        self.users.find_by_id(id)
    }

    /// All users, ordered by username.
    pub fn all_users(&self) -> Vec<User> {
        self.users.all()
    }

    /// All teacher accounts.
    pub fn teachers(&self) -> Vec<User> {
        self.users.by_role(UserRole::Teacher)
    }

    /// All student accounts.
    pub fn students(&self) -> Vec<User> {
        self.users.by_role(UserRole::Student)
    }

    /// Display name for a possibly-orphaned user reference.
    pub fn display_name(&self, id: Option<Uuid>) -> String {
        id.and_then(|id| self.users.find_by_id(id))
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_else(|| "Unknown user".to_string())
    }
}
