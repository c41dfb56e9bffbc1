//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::UserRole;

/// A registered user account.
///
/// The password is stored and compared in plaintext; there is no
/// hashing layer anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name (uniqueness is case-insensitive).
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// User role.
    pub role: UserRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Human-readable full name.
    pub full_name: Option<String>,
    /// Aggregate rating (teachers only).
    pub rating: Option<f32>,
    /// Subject area taught (teachers only).
    pub subject_area: Option<String>,
    /// External student number (students only).
    pub student_number: Option<String>,
    /// Contact email (students only).
    pub email: Option<String>,
    /// Contact phone (students only).
    pub phone: Option<String>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if this user is a teacher.
    pub fn is_teacher(&self) -> bool {
        matches!(self.role, UserRole::Teacher)
    }

    /// Merge a partial update into this record.
    pub fn apply(&mut self, updates: UpdateUser) {
        if let Some(username) = updates.username {
            self.username = username;
        }
        if let Some(password) = updates.password {
            self.password = password;
        }
        if let Some(role) = updates.role {
            self.role = role;
        }
        if let Some(full_name) = updates.full_name {
            self.full_name = Some(full_name);
        }
        if let Some(rating) = updates.rating {
            self.rating = Some(rating);
        }
        if let Some(subject_area) = updates.subject_area {
            self.subject_area = Some(subject_area);
        }
        if let Some(student_number) = updates.student_number {
            self.student_number = Some(student_number);
        }
        if let Some(email) = updates.email {
            self.email = Some(email);
        }
        if let Some(phone) = updates.phone {
            self.phone = Some(phone);
        }
    }
}

/// Data required to create a new user.
///
/// Role-inapplicable optional fields are stripped at creation time:
/// subject area and rating apply to teachers only, the student number,
/// email, and phone to students only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Assigned role.
    pub role: UserRole,
    /// Full name (optional, any role).
    pub full_name: Option<String>,
    /// Subject area (teachers only).
    pub subject_area: Option<String>,
    /// Student number (students only).
    pub student_number: Option<String>,
    /// Contact email (students only).
    pub email: Option<String>,
    /// Contact phone (students only).
    pub phone: Option<String>,
}

impl From<CreateUser> for User {
    /// Materializes the account with a fresh id and timestamp, stripping
    /// role-inapplicable fields. New teachers start with a zero rating.
    fn from(record: CreateUser) -> Self {
        let is_teacher = record.role == UserRole::Teacher;
        let is_student = record.role == UserRole::Student;
        Self {
            id: Uuid::new_v4(),
            username: record.username,
            password: record.password,
            role: record.role,
            created_at: Utc::now(),
            full_name: record.full_name,
            rating: is_teacher.then_some(0.0),
            subject_area: record.subject_area.filter(|_| is_teacher),
            student_number: record.student_number.filter(|_| is_student),
            email: record.email.filter(|_| is_student),
            phone: record.phone.filter(|_| is_student),
        }
    }
}

/// Partial update for an existing user; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New username.
    pub username: Option<String>,
    /// New password.
    pub password: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
    /// New full name.
    pub full_name: Option<String>,
    /// New rating.
    pub rating: Option<f32>,
    /// New subject area.
    pub subject_area: Option<String>,
    /// New student number.
    pub student_number: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone.
    pub phone: Option<String>,
}
