//! Incoming message and document attachment.

use chrono::{DateTime, Utc};

use super::{chat::Chat, user::User};

/// A file attached to an incoming message. `file_id` is what the transport needs to download it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_id: String,
    pub file_name: Option<String>,
    pub file_size: u32,
}

/// One inbound event, assembled per update from the transport's own message type.
/// `text` holds the message text (or the caption for documents); empty when there is none.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub text: String,
    pub document: Option<Document>,
    pub created_at: DateTime<Utc>,
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}
