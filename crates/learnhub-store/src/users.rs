//! User store implementation.

use dashmap::DashMap;
use uuid::Uuid;

use learnhub_entity::user::{User, UserRole};

/// Arena holding every user account, indexed by id.
#[derive(Debug, Default)]
pub struct UserStore {
    arena: DashMap<Uuid, User>,
}

impl UserStore {
    /// Create an empty user store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully-formed user record.
    pub fn insert(&self, user: User) {
        self.arena.insert(user.id, user);
    }

    /// Find a user by ID.
    pub fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.arena.get(&id).map(|u| u.clone())
    }

    /// Find a user by username, matched case-insensitively.
    ///
    /// Usernames are unique under case-insensitive comparison, so the
    /// first match is the only match.
    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.arena
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .map(|u| u.clone())
    }

    /// Check whether a username is already taken (case-insensitive).
    pub fn username_taken(&self, username: &str) -> bool {
        self.find_by_username(username).is_some()
    }

    /// Replace an existing record with an updated copy.
    pub fn replace(&self, user: User) {
        self.arena.insert(user.id, user);
    }

    /// Remove a user, returning the removed record.
    pub fn remove(&self, id: Uuid) -> Option<User> {
        self.arena.remove(&id).map(|(_, u)| u)
    }

    /// All users, ordered by username.
    pub fn all(&self) -> Vec<User> {
        let mut users: Vec<User> = self.arena.iter().map(|u| u.clone()).collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    /// All users with the given role, ordered by username.
    pub fn by_role(&self, role: UserRole) -> Vec<User> {
        let mut users: Vec<User> = self
            .arena
            .iter()
            .filter(|u| u.role == role)
            .map(|u| u.clone())
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    /// Number of accounts in the roster.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
