//! Outgoing replies: text with optional formatting and inline keyboard, in-memory documents, chat actions.

/// How the transport should interpret reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Plain,
    MarkdownV2,
}

/// Chat action shown next to the bot's name while it works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Typing,
}

/// A button of an inline keyboard that opens `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub text: String,
    pub url: String,
}

impl InlineButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// A text reply. Build with [`Reply::plain`] or [`Reply::markdown`] and chain the setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub parse_mode: ParseMode,
    /// Id of the message this reply quotes.
    pub reply_to: Option<String>,
    /// Rows of inline buttons; empty means no keyboard.
    pub keyboard: Vec<Vec<InlineButton>>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: ParseMode::Plain,
            reply_to: None,
            keyboard: Vec::new(),
        }
    }

    /// Text already formatted and escaped as Telegram MarkdownV2.
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            parse_mode: ParseMode::MarkdownV2,
            ..Self::plain(text)
        }
    }

    pub fn in_reply_to(mut self, message_id: impl Into<String>) -> Self {
        self.reply_to = Some(message_id.into());
        self
    }

    pub fn with_keyboard(mut self, rows: Vec<Vec<InlineButton>>) -> Self {
        self.keyboard = rows;
        self
    }
}

/// A document sent from memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub caption: Option<String>,
}

impl ReplyDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            caption: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}
