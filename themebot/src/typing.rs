//! "typing" chat action kept alive while a handler waits on the network.
//!
//! Telegram hides a chat action after about five seconds, so it is re-sent on an interval until
//! the guard is stopped or dropped. Send failures are only logged.

use std::sync::Arc;
use std::time::Duration;

use themebot_core::{Bot, Chat, ChatAction};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Re-send period used when nothing else is configured.
pub const DEFAULT_TYPING_INTERVAL: Duration = Duration::from_secs(4);

/// Smallest period accepted; `tokio::time::interval` rejects zero.
const MIN_TYPING_INTERVAL: Duration = Duration::from_millis(100);

/// Guard for a running typing indicator. The repeating task is aborted by [`TypingIndicator::stop`]
/// or, on any other exit path, when the guard is dropped.
#[must_use = "dropping the guard stops the indicator immediately"]
pub struct TypingIndicator {
    chat_id: i64,
    task: Option<JoinHandle<()>>,
}

impl TypingIndicator {
    /// Sends one "typing" action now, then again every `interval` until stopped.
    pub async fn start(bot: Arc<dyn Bot>, chat: Chat, interval: Duration) -> Self {
        let interval = interval.max(MIN_TYPING_INTERVAL);
        send_typing(bot.as_ref(), &chat).await;

        let chat_id = chat.id;
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                send_typing(bot.as_ref(), &chat).await;
            }
        });

        Self {
            chat_id,
            task: Some(task),
        }
    }

    /// Cancels the repeating send.
    pub fn stop(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(chat_id = self.chat_id, "Typing indicator stopped");
        }
    }
}

impl Drop for TypingIndicator {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn send_typing(bot: &dyn Bot, chat: &Chat) {
    if let Err(e) = bot.send_chat_action(chat, ChatAction::Typing).await {
        debug!(error = %e, chat_id = chat.id, "Failed to send typing action");
    }
}
