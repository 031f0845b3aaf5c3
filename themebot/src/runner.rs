//! Application entry: logging, config validation, Telegram and editor clients, then the REPL.

use anyhow::{Context, Result};
use std::sync::Arc;
use teloxide::prelude::*;
use themebot_core::init_tracing;
use tracing::{info, instrument, warn};

use crate::config::BotConfig;
use crate::dispatcher::Dispatcher;
use crate::telegram::{run_repl, TelegramBotAdapter};

/// teloxide Bot for the configured token, pointed at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Dispatcher wired to the given transport and the configured editor service.
pub fn build_dispatcher(
    config: &BotConfig,
    bot: Arc<dyn themebot_core::Bot>,
    bot_username: Option<String>,
) -> Dispatcher {
    let editor = Arc::new(config.editor.client());
    Dispatcher::new(bot, editor, config.editor_url())
        .with_typing_interval(config.typing_interval())
        .with_bot_username(bot_username)
}

/// Main entry: validate config, init logging, resolve the bot's username, run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        editor_api_url = %config.editor_api_url(),
        editor_url = %config.editor_url(),
        typing_interval_secs = config.typing_interval().as_secs(),
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config)?;

    let bot_username = match teloxide_bot.get_me().await {
        Ok(me) => me.user.username.clone(),
        Err(e) => {
            warn!(error = %e, "getMe failed; accepting commands addressed to any bot");
            None
        }
    };

    let adapter = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let dispatcher = build_dispatcher(&config, adapter, bot_username.clone());

    info!(
        "@{} is running…",
        bot_username.as_deref().unwrap_or("themebot")
    );

    run_repl(teloxide_bot, dispatcher).await
}
