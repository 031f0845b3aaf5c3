//! Theme service config: API base for upload/download and editor base for links.

use anyhow::Result;
use editor_client::{EditorClient, DEFAULT_API_URL, DEFAULT_EDITOR_URL};
use std::env;

#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// EDITOR_API_URL
    pub api_url: String,
    /// EDITOR_URL
    pub editor_url: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            editor_url: DEFAULT_EDITOR_URL.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("EDITOR_API_URL").unwrap_or(defaults.api_url),
            editor_url: env::var("EDITOR_URL").unwrap_or(defaults.editor_url),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("EDITOR_API_URL", &self.api_url), ("EDITOR_URL", &self.editor_url)] {
            if reqwest::Url::parse(value).is_err() {
                anyhow::bail!("{} is not a valid URL: {}", name, value);
            }
        }
        Ok(())
    }

    /// Client for the configured deployment.
    pub fn client(&self) -> EditorClient {
        EditorClient::with_urls(&self.api_url, &self.editor_url)
    }
}
