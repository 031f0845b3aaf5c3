//! REPL runner: converts teloxide messages to core::Message and passes them to the Dispatcher.

use anyhow::Result;
use teloxide::prelude::*;
use themebot_core::ToCoreMessage;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use crate::dispatcher::Dispatcher;

/// Runs long polling until Ctrl-C. Updates from one chat are handled in order; a failed reply is
/// logged and does not stop the loop.
#[instrument(skip(bot, dispatcher))]
pub async fn run_repl(bot: teloxide::Bot, dispatcher: Dispatcher) -> Result<()> {
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let dispatcher = dispatcher.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                has_document = core_msg.document.is_some(),
                "Received message"
            );

            if let Err(e) = dispatcher.dispatch(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, "Reply failed");
            }

            Ok(())
        }
    })
    .await;

    Ok(())
}
