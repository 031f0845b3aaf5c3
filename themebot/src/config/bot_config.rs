//! BotConfig: BaseConfig + EditorConfig. Use load() for env-based loading.

use anyhow::Result;
use std::time::Duration;

use super::base::DEFAULT_TYPING_INTERVAL_SECS;
use super::{BaseConfig, EditorConfig};

/// Bot config. Use BotConfig::load() for env-based loading, then validate() before init.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub editor: EditorConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let editor = EditorConfig::from_env();
        Ok(Self { base, editor })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.editor.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    /// Typing re-send period. An unparsable value reads as the default; validate() rejects it.
    pub fn typing_interval(&self) -> Duration {
        let secs = self
            .base
            .typing_interval_secs()
            .unwrap_or(DEFAULT_TYPING_INTERVAL_SECS);
        Duration::from_secs(secs)
    }
    pub fn editor_api_url(&self) -> &str {
        &self.editor.api_url
    }
    pub fn editor_url(&self) -> &str {
        &self.editor.editor_url
    }
}
