//! Mock implementation of [`themebot::Bot`] that records everything sent to the transport.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use themebot::{Bot, BotError, Chat, ChatAction, Reply, ReplyDocument};

/// One recorded transport call.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message { chat_id: i64, reply: Reply },
    Document { chat_id: i64, document: ReplyDocument },
    Action { chat_id: i64, action: ChatAction },
}

/// Records sends; `download_file` returns the configured bytes or fails when none are set.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    file: Mutex<Option<Vec<u8>>>,
    downloads: Mutex<Vec<String>>,
    fail_chat_actions: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Bot whose `download_file` returns `bytes`.
    pub fn with_file(bytes: &[u8]) -> Arc<Self> {
        let bot = Self::default();
        *bot.file.lock().unwrap() = Some(bytes.to_vec());
        Arc::new(bot)
    }

    /// Bot whose chat actions always fail (the indicator must not care).
    pub fn failing_chat_actions() -> Arc<Self> {
        Arc::new(Self {
            fail_chat_actions: true,
            ..Self::default()
        })
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Everything except chat actions.
    pub fn replies(&self) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| !matches!(s, Sent::Action { .. }))
            .collect()
    }

    pub fn action_count(&self) -> usize {
        self.sent()
            .iter()
            .filter(|s| matches!(s, Sent::Action { .. }))
            .count()
    }

    pub fn downloads(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }

    /// The single text reply; panics if there is not exactly one reply or it is a document.
    pub fn only_message(&self) -> Reply {
        let replies = self.replies();
        assert_eq!(replies.len(), 1, "expected exactly one reply, got {replies:?}");
        match &replies[0] {
            Sent::Message { reply, .. } => reply.clone(),
            other => panic!("expected a text reply, got {other:?}"),
        }
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, reply: Reply) -> themebot_core::Result<()> {
        self.sent.lock().unwrap().push(Sent::Message {
            chat_id: chat.id,
            reply,
        });
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, document: ReplyDocument) -> themebot_core::Result<()> {
        self.sent.lock().unwrap().push(Sent::Document {
            chat_id: chat.id,
            document,
        });
        Ok(())
    }

    async fn send_chat_action(&self, chat: &Chat, action: ChatAction) -> themebot_core::Result<()> {
        self.sent.lock().unwrap().push(Sent::Action {
            chat_id: chat.id,
            action,
        });
        if self.fail_chat_actions {
            return Err(BotError::Transport("chat action rejected".to_string()));
        }
        Ok(())
    }

    async fn download_file(&self, file_id: &str) -> themebot_core::Result<Vec<u8>> {
        self.downloads.lock().unwrap().push(file_id.to_string());
        self.file
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| BotError::Download(format!("no file {file_id}")))
    }
}
