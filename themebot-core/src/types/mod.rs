//! Core types: chat, user, incoming message and document, outgoing replies.
//!
//! One file per main type, as in the rest of the workspace.

mod chat;
mod message;
mod reply;
mod user;

pub use chat::Chat;
pub use message::{Document, Message, ToCoreMessage};
pub use reply::{ChatAction, InlineButton, ParseMode, Reply, ReplyDocument};
pub use user::User;
