//! Direct messaging between users.

use learnhub_core::result::AppResult;

use crate::prompt;
use crate::render;
use crate::state::AppState;

/// Pick a conversation partner, show the history, optionally reply.
pub fn messages(state: &AppState) -> AppResult<()> {
    let caller = state.caller()?;
    render::heading("Messages");

    let partners: Vec<_> = state
        .identity
        .all_users()
        .into_iter()
        .filter(|u| u.id != caller.user_id)
        .collect();
    if partners.is_empty() {
        render::warning("Nobody to message");
        return Ok(());
    }

    let labels: Vec<String> = partners
        .iter()
        .map(|u| {
            let unread = state
                .messages
                .conversation(caller.user_id, u.id)
                .iter()
                .filter(|m| m.receiver_id == caller.user_id && !m.is_read)
                .count();
            let name = u.full_name.clone().unwrap_or_else(|| u.username.clone());
            if unread > 0 {
                format!("{} ({} unread)", name, unread)
            } else {
                name
            }
        })
        .collect();
    let index = prompt::select("Conversation with", &labels)?;
    let partner = &partners[index];

    for message in state.messages.conversation(caller.user_id, partner.id) {
        let from = if message.sender_id == caller.user_id {
            "me".to_string()
        } else {
            state.identity.display_name(Some(message.sender_id))
        };
        println!(
            "[{}] {}: {}",
            message.sent_at.format("%Y-%m-%d %H:%M"),
            from,
            message.content
        );
    }

    if prompt::confirm("Send a message?")? {
        let content = prompt::text("Message")?;
        state.messages.send(&caller, partner.id, &content)?;
        render::success("Message sent");
    }
    Ok(())
}
