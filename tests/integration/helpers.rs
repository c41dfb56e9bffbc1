//! Shared helpers for integration tests.

use uuid::Uuid;

use learnhub_console::AppState;
use learnhub_core::config::AppConfig;
use learnhub_entity::category::Category;
use learnhub_entity::user::User;
use learnhub_service::context::CallerContext;

/// A fully wired application over seeded in-memory stores.
pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    /// Build the application with the default (seeded) configuration.
    pub fn new() -> Self {
        let state = AppState::new(AppConfig::default()).expect("failed to build app state");
        Self { state }
    }

    /// Look up a seeded or created user by username.
    pub fn user(&self, username: &str) -> User {
        self.state
            .identity
            .all_users()
            .into_iter()
            .find(|u| u.username == username)
            .unwrap_or_else(|| panic!("no user '{username}'"))
    }

    /// A caller context for the given username.
    pub fn caller(&self, username: &str) -> CallerContext {
        CallerContext::from(&self.user(username))
    }

    /// The caller context of the seeded primary admin.
    pub fn admin(&self) -> CallerContext {
        self.caller("academy_admin")
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Category {
        self.state
            .categories
            .all_categories()
            .into_iter()
            .find(|c| c.name == name)
            .unwrap_or_else(|| panic!("no category '{name}'"))
    }

    /// Look up a seeded lesson id by title.
    pub fn lesson_id(&self, title: &str) -> Uuid {
        self.state
            .lessons
            .all_lessons()
            .into_iter()
            .find(|l| l.title == title)
            .map(|l| l.id)
            .unwrap_or_else(|| panic!("no lesson '{title}'"))
    }
}
