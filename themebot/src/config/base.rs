//! Base config: Telegram Bot connection, logging, typing indicator. Loaded from env.

use anyhow::{Context, Result};
use std::env;

/// Typing re-send period when TYPING_INTERVAL_SECS is unset.
pub const DEFAULT_TYPING_INTERVAL_SECS: u64 = 4;

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// TYPING_INTERVAL_SECS as given; checked by validate()
    pub typing_interval_secs: Option<String>,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/themebot.log".to_string());
        let typing_interval_secs = env::var("TYPING_INTERVAL_SECS").ok();

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            typing_interval_secs,
        })
    }

    /// Validate config (telegram_api_url must be a valid URL if set; interval must be a positive integer).
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.typing_interval_secs()? == 0 {
            anyhow::bail!("TYPING_INTERVAL_SECS must be greater than zero");
        }
        Ok(())
    }

    /// Seconds between "typing" re-sends; the default when unset.
    pub fn typing_interval_secs(&self) -> Result<u64> {
        match self.typing_interval_secs.as_deref() {
            Some(raw) => raw.trim().parse().with_context(|| {
                format!("TYPING_INTERVAL_SECS is not a whole number of seconds: {}", raw)
            }),
            None => Ok(DEFAULT_TYPING_INTERVAL_SECS),
        }
    }
}
