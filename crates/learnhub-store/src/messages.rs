//! Chat message store implementation.

use dashmap::DashMap;
use uuid::Uuid;

use learnhub_entity::message::ChatMessage;

/// Append-only arena holding the chat message log, indexed by id.
#[derive(Debug, Default)]
pub struct MessageStore {
    arena: DashMap<Uuid, ChatMessage>,
}

impl MessageStore {
    /// Create an empty message store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the log.
    pub fn insert(&self, message: ChatMessage) {
        self.arena.insert(message.id, message);
    }

    /// All messages where the user is sender or receiver, ordered by
    /// send time.
    pub fn by_user(&self, user_id: Uuid) -> Vec<ChatMessage> {
        let mut messages: Vec<ChatMessage> = self
            .arena
            .iter()
            .filter(|m| m.involves(user_id))
            .map(|m| m.clone())
            .collect();
        messages.sort_by(|a, b| a.sent_at.cmp(&b.sent_at));
        messages
    }

    /// The conversation between two users (unordered pair), ascending by
    /// send time.
    pub fn between(&self, a: Uuid, b: Uuid) -> Vec<ChatMessage> {
        let mut messages: Vec<ChatMessage> = self
            .arena
            .iter()
            .filter(|m| m.between(a, b))
            .map(|m| m.clone())
            .collect();
        messages.sort_by(|a, b| a.sent_at.cmp(&b.sent_at));
        messages
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
