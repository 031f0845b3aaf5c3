//! # editor-client
//!
//! Client for the remote .attheme editor service. Three operations:
//!
//! - [`ThemeEditor::upload`]: POST `{ name, content: base64 }` to `<api>/load-theme/`, returns the
//!   [`ThemeId`] the service assigned (plain-text response body).
//! - [`ThemeEditor::download`]: GET `<api>/get-theme/?themeId=<id>`, returns the [`Theme`] JSON
//!   record. The service hands each id out once; a second download fails.
//! - [`ThemeEditor::link_for`]: `<editor>/?themeId=<id>`, pure string building.
//!
//! No retries, no caching, no timeouts beyond reqwest defaults.
//!
//! ## Example
//!
//! ```rust,no_run
//! use editor_client::{EditorClient, ThemeEditor};
//!
//! async fn example() -> Result<(), editor_client::EditorError> {
//!     let client = EditorClient::new();
//!     let id = client.upload("Night", b"windowBackgroundWhite=-1\n").await?;
//!     println!("open {}", client.link_for(id.as_str()));
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod theme;

pub use client::{EditorClient, ThemeEditor, DEFAULT_API_URL, DEFAULT_EDITOR_URL};
pub use error::{EditorError, Result};
pub use theme::{Theme, ThemeId};
