//! Seed data configuration.

use serde::{Deserialize, Serialize};

/// Settings for the mock data seeded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether to seed demo categories, lessons, and accounts.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Username of the primary (undeletable) admin account.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Password of the primary admin account, stored as plaintext.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_admin_username() -> String {
    "academy_admin".to_string()
}

fn default_admin_password() -> String {
    "Dev$Market_Sphere@2025!".to_string()
}
