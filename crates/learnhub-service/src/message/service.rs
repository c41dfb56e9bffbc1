//! Append-only direct messaging between two users.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_entity::message::ChatMessage;
use learnhub_store::MessageStore;

use crate::context::CallerContext;

/// Manages the direct-message log.
///
/// Messages are never edited or deleted; the read flag is recorded at
/// send time and never flipped by the current workflows.
#[derive(Debug)]
pub struct MessageService {
    /// The append-only message log.
    messages: Arc<MessageStore>,
}

impl MessageService {
    /// Creates a new message service.
    pub fn new(messages: Arc<MessageStore>) -> Self {
        Self { messages }
    }

    /// Sends a message from the caller to `receiver_id`.
    ///
    /// The content is trimmed; an empty message is rejected. The receiver
    /// is not checked for existence — a message to a since-deleted user
    /// simply resolves to a placeholder name at read time.
    pub fn send(
        &self,
        caller: &CallerContext,
        receiver_id: Uuid,
        content: &str,
    ) -> AppResult<ChatMessage> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::validation("Message cannot be empty"));
        }

        let message = ChatMessage {
            id: Uuid::new_v4(),
            sender_id: caller.user_id,
            receiver_id,
            content: content.to_string(),
            sent_at: Utc::now(),
            is_read: false,
        };

        debug!(
            sender = %caller.username,
            receiver_id = %receiver_id,
            "Message sent"
        );

        self.messages.insert(message.clone());
        Ok(message)
    }

    /// All messages where the user is sender or receiver.
    pub fn messages_by_user(&self, user_id: Uuid) -> Vec<ChatMessage> {
        self.messages.by_user(user_id)
    }

    /// The conversation between two users, ascending by send time.
    pub fn conversation(&self, a: Uuid, b: Uuid) -> Vec<ChatMessage> {
        self.messages.between(a, b)
    }
}
