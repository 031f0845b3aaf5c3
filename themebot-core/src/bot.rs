//! Bot abstraction for everything the handlers ask of the chat transport.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation is `themebot::TelegramBotAdapter`.
//! Tests substitute a recording implementation.

use crate::error::{BotError, Result};
use crate::types::{Chat, ChatAction, Reply, ReplyDocument};
use async_trait::async_trait;

/// Outbound side of the chat transport: replies, documents, chat actions and file downloads.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text reply (optionally formatted, quoting a message, with an inline keyboard).
    async fn send_message(&self, chat: &Chat, reply: Reply) -> Result<()>;
    /// Sends a file built from in-memory bytes.
    async fn send_document(&self, chat: &Chat, document: ReplyDocument) -> Result<()>;
    /// Shows a chat action ("typing", ...). Telegram clears it after about five seconds.
    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> Result<()>;
    /// Downloads the raw bytes of a file previously sent to the bot.
    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>>;
}

/// Parses a transport message id ("123") back into Telegram's numeric id.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::InvalidMessageId(s.to_string()))
}
