//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the role-based access model.
///
/// `Student` is serialized as `"user"` to match the records the session
/// store may already hold from earlier runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full system administrator.
    Admin,
    /// Can create lessons and grade homework.
    Teacher,
    /// Regular learner account.
    #[serde(rename = "user")]
    Student,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role may manage lessons (teacher or admin).
    pub fn can_manage_lessons(&self) -> bool {
        matches!(self, Self::Admin | Self::Teacher)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = learnhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "teacher" => Ok(Self::Teacher),
            "user" | "student" => Ok(Self::Student),
            _ => Err(learnhub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, teacher, user"
            ))),
        }
    }
}
