//! Routes each incoming message to exactly one reply path.
//!
//! - `/start` without arguments and `/help`: static texts, no network.
//! - `/start <theme id>`: download the theme from the editor and send it back as a file.
//! - document: upload an `.attheme` file to the editor and reply with a one-time link.
//!
//! Branches that touch the network run under a [`TypingIndicator`].

use std::sync::Arc;
use std::time::Duration;

use editor_client::{Theme, ThemeEditor, ThemeId};
use themebot_core::{Bot, Chat, Document, InlineButton, Message, ReplyDocument, Result};
use tracing::{error, info, instrument, warn};

use crate::localization;
use crate::typing::{TypingIndicator, DEFAULT_TYPING_INTERVAL};

/// File extension the bot accepts.
pub const THEME_EXTENSION: &str = ".attheme";

/// What an incoming message asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `/start`, optionally with a theme id (deep-link payload).
    Start { theme_id: Option<String> },
    Help,
    Document(Document),
    /// Plain text, unknown commands, commands for another bot.
    Ignored,
}

impl Event {
    /// Classifies a message. Documents win over captions; commands addressed with `@name` only
    /// count when `name` matches `bot_username` (or when the username is unknown).
    pub fn classify(message: &Message, bot_username: Option<&str>) -> Self {
        if let Some(document) = &message.document {
            return Event::Document(document.clone());
        }

        match parse_command(&message.text, bot_username) {
            Some(("start", args)) => Event::Start {
                theme_id: (!args.is_empty()).then(|| args.to_string()),
            },
            Some(("help", _)) => Event::Help,
            _ => Event::Ignored,
        }
    }
}

/// Splits `/name[@bot] args` into `(name, args)`; args are trimmed. Returns `None` for text that
/// is not a command or is addressed to a different bot. Names are matched case-sensitively, as
/// Telegram clients send them in lowercase.
pub fn parse_command<'a>(text: &'a str, bot_username: Option<&str>) -> Option<(&'a str, &'a str)> {
    let text = text.trim_start();
    let rest = text.strip_prefix('/')?;
    let (head, args) = match rest.find(char::is_whitespace) {
        Some(pos) => (&rest[..pos], rest[pos..].trim()),
        None => (rest, ""),
    };

    let name = match head.split_once('@') {
        Some((name, mention)) => {
            if let Some(username) = bot_username {
                if !mention.eq_ignore_ascii_case(username) {
                    return None;
                }
            }
            name
        }
        None => head,
    };

    if name.is_empty() {
        return None;
    }
    Some((name, args))
}

/// Theme name for an uploaded file: the file name with exactly one trailing `.attheme` removed.
pub fn theme_name(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(THEME_EXTENSION)
}

/// Which reply path a message took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Welcome,
    Help,
    ThemeSent,
    ThemeEmpty,
    ThemeAlreadyDownloaded,
    ThemeUploaded,
    WrongFileType,
    /// Upload path failed; nothing was sent to the user.
    UploadFailed,
    Ignored,
}

/// Per-process handler state: transport, editor client and settings. Cheap to clone.
#[derive(Clone)]
pub struct Dispatcher {
    bot: Arc<dyn Bot>,
    editor: Arc<dyn ThemeEditor>,
    editor_url: String,
    typing_interval: Duration,
    bot_username: Option<String>,
}

impl Dispatcher {
    /// `editor_url` is linked from the welcome and help texts.
    pub fn new(bot: Arc<dyn Bot>, editor: Arc<dyn ThemeEditor>, editor_url: impl Into<String>) -> Self {
        Self {
            bot,
            editor,
            editor_url: editor_url.into(),
            typing_interval: DEFAULT_TYPING_INTERVAL,
            bot_username: None,
        }
    }

    pub fn with_typing_interval(mut self, interval: Duration) -> Self {
        self.typing_interval = interval;
        self
    }

    /// Username used to filter `/command@name` addressed to other bots.
    pub fn with_bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    pub fn bot_username(&self) -> Option<&str> {
        self.bot_username.as_deref()
    }

    /// Handles one message. Errors are reply-send failures only.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id, message_id = %message.id))]
    pub async fn dispatch(&self, message: &Message) -> Result<Outcome> {
        let event = Event::classify(message, self.bot_username());

        let outcome = match event {
            Event::Start { theme_id: None } => {
                self.bot
                    .send_message(&message.chat, localization::start_message(&self.editor_url))
                    .await?;
                Outcome::Welcome
            }
            Event::Start {
                theme_id: Some(theme_id),
            } => self.handle_start_with_theme(&message.chat, &theme_id).await?,
            Event::Help => {
                self.bot
                    .send_message(&message.chat, localization::help_message(&self.editor_url))
                    .await?;
                Outcome::Help
            }
            Event::Document(document) => self.handle_document(message, &document).await?,
            Event::Ignored => Outcome::Ignored,
        };

        info!(outcome = ?outcome, "Message handled");
        Ok(outcome)
    }

    async fn start_typing(&self, chat: &Chat) -> TypingIndicator {
        TypingIndicator::start(self.bot.clone(), chat.clone(), self.typing_interval).await
    }

    /// Sends the theme stored under `theme_id` back as a file. Every editor failure reads as
    /// "already downloaded" to the user; the cause only goes to the log.
    async fn handle_start_with_theme(&self, chat: &Chat, theme_id: &str) -> Result<Outcome> {
        let typing = self.start_typing(chat).await;

        let outcome = match self.fetch_theme(theme_id).await {
            Ok((_, content)) if content.is_empty() => {
                self.bot
                    .send_message(chat, localization::theme_is_empty())
                    .await?;
                Outcome::ThemeEmpty
            }
            Ok((theme, content)) => {
                let document = ReplyDocument::new(theme.file_name(), content)
                    .caption(localization::theme_file_caption());
                self.bot.send_document(chat, document).await?;
                Outcome::ThemeSent
            }
            Err(e) => {
                warn!(error = %e, theme_id = %theme_id, "Theme download failed");
                self.bot
                    .send_message(chat, localization::theme_already_downloaded())
                    .await?;
                Outcome::ThemeAlreadyDownloaded
            }
        };

        typing.stop();
        Ok(outcome)
    }

    async fn fetch_theme(&self, theme_id: &str) -> editor_client::Result<(Theme, Vec<u8>)> {
        let theme = self.editor.download(theme_id).await?;
        let content = theme.decode()?;
        Ok((theme, content))
    }

    /// Uploads an `.attheme` document and replies with the editor button. Any other file gets the
    /// "wrong file type" reply without touching the network.
    async fn handle_document(&self, message: &Message, document: &Document) -> Result<Outcome> {
        let Some(name) = document.file_name.as_deref().and_then(theme_name) else {
            info!(file_name = ?document.file_name, "Rejected non-theme document");
            self.bot
                .send_message(
                    &message.chat,
                    localization::wrong_file_type().in_reply_to(message.id.as_str()),
                )
                .await?;
            return Ok(Outcome::WrongFileType);
        };

        let typing = self.start_typing(&message.chat).await;

        let theme_id = match self.upload_theme(document, name).await {
            Ok(theme_id) => theme_id,
            Err(e) => {
                error!(error = %e, file_name = %name, "Theme upload failed, no reply sent");
                typing.stop();
                return Ok(Outcome::UploadFailed);
            }
        };

        let button = InlineButton::url(
            localization::open_theme_button(name),
            self.editor.link_for(theme_id.as_str()),
        );
        let reply = localization::theme_uploaded()
            .in_reply_to(message.id.as_str())
            .with_keyboard(vec![vec![button]]);
        self.bot.send_message(&message.chat, reply).await?;

        typing.stop();
        Ok(Outcome::ThemeUploaded)
    }

    async fn upload_theme(&self, document: &Document, name: &str) -> anyhow::Result<ThemeId> {
        let content = self.bot.download_file(&document.file_id).await?;
        let theme_id = self.editor.upload(name, &content).await?;
        Ok(theme_id)
    }
}
