use thiserror::Error;

/// Failures talking to the theme service. Callers on the download path collapse all of them
/// into one user-facing message; the variants exist for logs.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Theme service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Theme content is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Theme service returned an empty theme id")]
    EmptyThemeId,
}

pub type Result<T> = std::result::Result<T, EditorError>;
