//! [`ThemeEditor`] trait and its reqwest implementation.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{info, instrument};

use crate::error::{EditorError, Result};
use crate::theme::{Theme, ThemeId};

/// Base URL of the theme service API (`load-theme/`, `get-theme/` live under it).
pub const DEFAULT_API_URL: &str = "https://snejugal.ru/attheme-editor";
/// Base URL of the web editor that opens a theme by id.
pub const DEFAULT_EDITOR_URL: &str = "https://snejugal.ru/attheme-editor";

/// Operations the bot needs from the theme service. Handlers depend on this trait so tests can
/// count calls without a server.
#[async_trait]
pub trait ThemeEditor: Send + Sync {
    /// Stores `content` under `name` and returns the handle for opening it in the editor.
    async fn upload(&self, name: &str, content: &[u8]) -> Result<ThemeId>;
    /// Fetches the theme stored under `theme_id`. Fails once the handle has been used.
    async fn download(&self, theme_id: &str) -> Result<Theme>;
    /// Editor link for `theme_id`. No I/O.
    fn link_for(&self, theme_id: &str) -> String;
}

/// reqwest-based [`ThemeEditor`].
#[derive(Debug, Clone)]
pub struct EditorClient {
    client: Client,
    api_url: String,
    editor_url: String,
}

impl EditorClient {
    /// Client for the public service.
    pub fn new() -> Self {
        Self::with_urls(DEFAULT_API_URL, DEFAULT_EDITOR_URL)
    }

    /// Client for a custom deployment (or a mock server in tests). Trailing slashes are ignored.
    pub fn with_urls(api_url: impl Into<String>, editor_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            editor_url: editor_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn editor_url(&self) -> &str {
        &self.editor_url
    }

    fn upload_url(&self) -> String {
        format!("{}/load-theme/", self.api_url)
    }

    fn download_url(&self) -> String {
        format!("{}/get-theme/", self.api_url)
    }

    /// Reads the body, turning a non-2xx status into [`EditorError::Status`].
    async fn read_body(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(EditorError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

impl Default for EditorClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ThemeEditor for EditorClient {
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    async fn upload(&self, name: &str, content: &[u8]) -> Result<ThemeId> {
        let request = Theme::from_bytes(name, content);

        let response = self
            .client
            .post(self.upload_url())
            .json(&request)
            .send()
            .await?;
        let body = Self::read_body(response).await?;

        let theme_id = body.trim();
        if theme_id.is_empty() {
            return Err(EditorError::EmptyThemeId);
        }

        info!(theme_id = %theme_id, "Theme uploaded to editor");
        Ok(ThemeId::new(theme_id))
    }

    #[instrument(skip(self))]
    async fn download(&self, theme_id: &str) -> Result<Theme> {
        let response = self
            .client
            .get(self.download_url())
            .query(&[("themeId", theme_id)])
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        let theme: Theme = serde_json::from_str(&body)?;

        info!(
            theme_name = %theme.name,
            content_len = theme.content.len(),
            "Theme downloaded from editor"
        );
        Ok(theme)
    }

    fn link_for(&self, theme_id: &str) -> String {
        format!("{}/?themeId={}", self.editor_url, theme_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let client = EditorClient::new();
        assert_eq!(client.api_url(), DEFAULT_API_URL);
        assert_eq!(client.editor_url(), DEFAULT_EDITOR_URL);
        assert_eq!(
            client.upload_url(),
            "https://snejugal.ru/attheme-editor/load-theme/"
        );
        assert_eq!(
            client.download_url(),
            "https://snejugal.ru/attheme-editor/get-theme/"
        );
    }

    #[test]
    fn test_with_urls_trims_trailing_slash() {
        let client = EditorClient::with_urls("http://localhost:8080/", "https://editor.test/");
        assert_eq!(client.api_url(), "http://localhost:8080");
        assert_eq!(client.link_for("id"), "https://editor.test/?themeId=id");
    }
}
