use rand::seq::SliceRandom;
use tracing::debug;

use crate::config::CANNED_REPLIES;
use crate::core::errors::{AppError, Result};
use crate::core::helpers::{new_id, now_iso, sanitize_text};
use crate::models::models::{Conversation, Message, Sender};
use crate::App;

pub fn conversations(app: &App) -> &[Conversation] {
    &app.store.conversations
}

pub fn conversation<'a>(app: &'a App, id: &str) -> Result<&'a Conversation> {
    app.store
        .conversations
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| AppError::MissingEntity(format!("conversation {}", id)))
}

/// Append an outgoing message to the conversation.
pub fn send_message(app: &mut App, conversation_id: &str, text: &str) -> Result<Message> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::EmptyMessage);
    }

    let convo = app
        .store
        .conversations
        .iter_mut()
        .find(|c| c.id == conversation_id)
        .ok_or_else(|| AppError::MissingEntity(format!("conversation {}", conversation_id)))?;

    let message = Message {
        id: new_id(),
        sender: Sender::Me,
        text: sanitize_text(text),
        sent_at: now_iso(),
    };

    convo.messages.push(message.clone());
    app.save_conversations()?;

    debug!(conversation_id, "sent message");
    Ok(message)
}

/// Append one simulated reply, drawn uniformly at random from the canned
/// set. The host schedules this after `config::reply_delay_ms()`; nothing
/// orders two pending replies relative to each other.
pub fn auto_reply(app: &mut App, conversation_id: &str) -> Result<Message> {
    let convo = app
        .store
        .conversations
        .iter_mut()
        .find(|c| c.id == conversation_id)
        .ok_or_else(|| AppError::MissingEntity(format!("conversation {}", conversation_id)))?;

    let reply = CANNED_REPLIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Ok!");

    let message = Message {
        id: new_id(),
        sender: Sender::Peer,
        text: reply.to_string(),
        sent_at: now_iso(),
    };

    convo.messages.push(message.clone());
    app.save_conversations()?;
    Ok(message)
}
