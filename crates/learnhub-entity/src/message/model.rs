//! Chat message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A direct message between two users.
///
/// Messages form an append-only log; a conversation is derived by
/// filtering on the unordered pair of participants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier.
    pub id: Uuid,
    /// The sending user.
    pub sender_id: Uuid,
    /// The receiving user.
    pub receiver_id: Uuid,
    /// Message body.
    pub content: String,
    /// When the message was sent.
    pub sent_at: DateTime<Utc>,
    /// Read flag (recorded but never mutated by the current workflows).
    pub is_read: bool,
}

impl ChatMessage {
    /// Check whether `user_id` is a participant of this message.
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }

    /// Check whether this message belongs to the conversation between
    /// `a` and `b`, in either direction.
    pub fn between(&self, a: Uuid, b: Uuid) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}
