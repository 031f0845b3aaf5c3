//! # themebot
//!
//! Telegram bot for the .attheme editor. Send it an `.attheme` file and it replies with a one-time
//! link that opens the theme in the web editor; `/start <theme id>` (the editor's "send to
//! Telegram" deep link) sends the edited theme back as a file.
//!
//! Layers: [`dispatcher`] routes each core message to one branch, [`typing`] keeps the "typing"
//! action alive during network calls, [`telegram`] adapts teloxide to `themebot_core::Bot`, and
//! [`runner`] wires config, logging and the editor client together.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod localization;
pub mod runner;
pub mod telegram;
pub mod typing;

pub use cli::{load_config, Cli, Commands};
pub use config::{BaseConfig, BotConfig, EditorConfig};
pub use dispatcher::{parse_command, theme_name, Dispatcher, Event, Outcome, THEME_EXTENSION};
pub use runner::run_bot;
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
pub use typing::{TypingIndicator, DEFAULT_TYPING_INTERVAL};

pub use themebot_core::{
    Bot, BotError, Chat, ChatAction, Document, InlineButton, Message, ParseMode, Reply,
    ReplyDocument, User,
};
