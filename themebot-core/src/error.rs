//! Error types for the bot core.

use thiserror::Error;

/// Errors raised by a [`crate::Bot`] implementation or while building outgoing messages.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("File download error: {0}")]
    Download(String),

    #[error("Invalid message_id: {0}")]
    InvalidMessageId(String),

    #[error("Invalid button url: {0}")]
    InvalidUrl(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
