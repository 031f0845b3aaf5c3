//! Bot configuration: BaseConfig (Telegram + log + typing) and EditorConfig (theme service URLs).

mod base;
mod bot_config;
mod editor;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use editor::EditorConfig;
