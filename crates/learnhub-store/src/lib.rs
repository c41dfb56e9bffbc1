//! # learnhub-store
//!
//! In-memory entity stores for Academy LearnHub. Each entity lives in its
//! own indexed arena (id → record) behind a `DashMap`, so stores can be
//! shared as `Arc<...>` and mutated through `&self`. All state is lost
//! when the process exits; only the session record and the language
//! preference survive through the client-store collaborator.

pub mod categories;
pub mod lessons;
pub mod messages;
pub mod seed;
pub mod submissions;
pub mod users;

use std::sync::Arc;

pub use categories::CategoryStore;
pub use lessons::LessonStore;
pub use messages::MessageStore;
pub use submissions::SubmissionStore;
pub use users::UserStore;

/// Bundle of all entity stores, constructed once per application instance.
#[derive(Debug, Clone, Default)]
pub struct Stores {
    /// User roster.
    pub users: Arc<UserStore>,
    /// Category forest.
    pub categories: Arc<CategoryStore>,
    /// Lesson catalog.
    pub lessons: Arc<LessonStore>,
    /// Homework submissions.
    pub submissions: Arc<SubmissionStore>,
    /// Chat message log.
    pub messages: Arc<MessageStore>,
}

impl Stores {
    /// Create a fresh, empty set of stores.
    pub fn new() -> Self {
        Self::default()
    }
}
