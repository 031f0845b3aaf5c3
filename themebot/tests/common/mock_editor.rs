//! Mock [`editor_client::ThemeEditor`] that counts calls and returns canned results.

use async_trait::async_trait;
use editor_client::{EditorError, Theme, ThemeEditor, ThemeId};
use std::sync::{Arc, Mutex};

pub const EDITOR_URL: &str = "https://editor.test";

/// What `download` answers with.
#[derive(Clone)]
pub enum DownloadResult {
    Theme(Theme),
    /// Service refused the id (already used or unknown).
    Refused,
}

pub struct MockEditor {
    download_result: DownloadResult,
    upload_id: Option<String>,
    uploads: Mutex<Vec<(String, Vec<u8>)>>,
    downloads: Mutex<Vec<String>>,
}

impl MockEditor {
    fn build(download_result: DownloadResult, upload_id: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            download_result,
            upload_id: upload_id.map(str::to_string),
            uploads: Mutex::new(Vec::new()),
            downloads: Mutex::new(Vec::new()),
        })
    }

    /// Editor that serves `theme` and accepts uploads as `abc123`.
    pub fn serving(theme: Theme) -> Arc<Self> {
        Self::build(DownloadResult::Theme(theme), Some("abc123"))
    }

    /// Editor whose downloads fail and whose uploads succeed as `abc123`.
    pub fn refusing() -> Arc<Self> {
        Self::build(DownloadResult::Refused, Some("abc123"))
    }

    /// Editor whose uploads fail.
    pub fn upload_failing() -> Arc<Self> {
        Self::build(DownloadResult::Refused, None)
    }

    pub fn uploads(&self) -> Vec<(String, Vec<u8>)> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn downloads(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.uploads().len() + self.downloads().len()
    }
}

#[async_trait]
impl ThemeEditor for MockEditor {
    async fn upload(&self, name: &str, content: &[u8]) -> editor_client::Result<ThemeId> {
        self.uploads
            .lock()
            .unwrap()
            .push((name.to_string(), content.to_vec()));
        match &self.upload_id {
            Some(id) => Ok(ThemeId::new(id.clone())),
            None => Err(EditorError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            }),
        }
    }

    async fn download(&self, theme_id: &str) -> editor_client::Result<Theme> {
        self.downloads.lock().unwrap().push(theme_id.to_string());
        match &self.download_result {
            DownloadResult::Theme(theme) => Ok(theme.clone()),
            DownloadResult::Refused => Err(EditorError::Status {
                status: 400,
                body: "theme not found".to_string(),
            }),
        }
    }

    fn link_for(&self, theme_id: &str) -> String {
        format!("{}/?themeId={}", EDITOR_URL, theme_id)
    }
}
