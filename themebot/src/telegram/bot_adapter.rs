//! Wraps teloxide::Bot and implements [`themebot_core::Bot`]. Production code talks to Telegram;
//! tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{
    ChatAction as TgChatAction, ChatId, FileId, InlineKeyboardButton, InlineKeyboardMarkup,
    InputFile, MessageId, ParseMode as TgParseMode, ReplyParameters,
};
use themebot_core::{
    parse_message_id, Bot as CoreBot, BotError, Chat, ChatAction, InlineButton, ParseMode, Reply,
    ReplyDocument, Result,
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

fn transport_error(e: impl std::fmt::Display) -> BotError {
    BotError::Transport(e.to_string())
}

/// Converts core button rows into a teloxide inline keyboard; every url must parse.
fn inline_keyboard(rows: &[Vec<InlineButton>]) -> Result<InlineKeyboardMarkup> {
    let rows = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| {
                    let url = reqwest::Url::parse(&button.url)
                        .map_err(|e| BotError::InvalidUrl(format!("{}: {}", button.url, e)))?;
                    Ok(InlineKeyboardButton::url(button.text.clone(), url))
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(InlineKeyboardMarkup::new(rows))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, reply: Reply) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text);
        if reply.parse_mode == ParseMode::MarkdownV2 {
            request = request.parse_mode(TgParseMode::MarkdownV2);
        }
        if let Some(message_id) = reply.reply_to.as_deref() {
            let id = parse_message_id(message_id)?;
            request = request.reply_parameters(ReplyParameters::new(MessageId(id)));
        }
        if !reply.keyboard.is_empty() {
            request = request.reply_markup(inline_keyboard(&reply.keyboard)?);
        }
        request.await.map_err(transport_error)?;
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, document: ReplyDocument) -> Result<()> {
        let file = InputFile::memory(document.bytes).file_name(document.file_name);
        let mut request = self.bot.send_document(ChatId(chat.id), file);
        if let Some(caption) = document.caption {
            request = request.caption(caption);
        }
        request.await.map_err(transport_error)?;
        Ok(())
    }

    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> Result<()> {
        let action = match action {
            ChatAction::Typing => TgChatAction::Typing,
        };
        self.bot
            .send_chat_action(ChatId(chat.id), action)
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(transport_error)?;
        let mut buf = Vec::new();
        self.bot
            .download_file(&file.path, &mut buf)
            .await
            .map_err(|e| BotError::Download(e.to_string()))?;
        Ok(buf)
    }
}
