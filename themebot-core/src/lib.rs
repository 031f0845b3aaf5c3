//! # themebot-core
//!
//! Core types and traits for the .attheme editor bot: [`Bot`], incoming [`Message`] and
//! [`Document`], outgoing [`Reply`] and [`ReplyDocument`], errors, and tracing initialization.
//! Transport-agnostic; the Telegram implementation lives in the `themebot` crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, ChatAction, Document, InlineButton, Message, ParseMode, Reply, ReplyDocument,
    ToCoreMessage, User,
};
