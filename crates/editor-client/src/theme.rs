//! Wire types of the theme service.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Decoder for stored content; padding is optional.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Opaque single-use handle assigned by the service on upload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeId(String);

impl ThemeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Theme record as returned by `get-theme`. `content` is base64 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub content: String,
}

impl Theme {
    /// Builds a record from raw file bytes, encoding them for the wire.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            content: STANDARD.encode(bytes),
        }
    }

    /// Decodes `content` back to the theme file bytes. Line breaks and missing padding are
    /// accepted.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let compact: Vec<u8> = self
            .content
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        Ok(LENIENT.decode(compact)?)
    }

    /// File name the theme is sent back under.
    pub fn file_name(&self) -> String {
        format!("{}.attheme", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_encodes_base64() {
        let theme = Theme::from_bytes("Night", b"divider=-1");
        assert_eq!(theme.content, "ZGl2aWRlcj0tMQ==");
        assert_eq!(theme.decode().unwrap(), b"divider=-1");
    }

    #[test]
    fn test_decode_unpadded_content() {
        let theme = Theme {
            name: "Night".to_string(),
            content: "ZGl2aWRlcj0tMQ".to_string(),
        };
        assert_eq!(theme.decode().unwrap(), b"divider=-1");
    }

    #[test]
    fn test_decode_line_wrapped_content() {
        let theme = Theme {
            name: "Night".to_string(),
            content: "ZGl2aWRl\ncj0tMQ==\r\n".to_string(),
        };
        assert_eq!(theme.decode().unwrap(), b"divider=-1");
    }

    #[test]
    fn test_decode_empty_content() {
        let theme = Theme {
            name: "Empty".to_string(),
            content: String::new(),
        };
        assert!(theme.decode().unwrap().is_empty());
    }

    #[test]
    fn test_decode_invalid_base64() {
        let theme = Theme {
            name: "Broken".to_string(),
            content: "not base64!".to_string(),
        };
        assert!(theme.decode().is_err());
    }

    #[test]
    fn test_file_name_appends_extension() {
        let theme = Theme::from_bytes("My theme", b"x");
        assert_eq!(theme.file_name(), "My theme.attheme");
    }

    #[test]
    fn test_theme_id_display() {
        let id = ThemeId::new("abc123");
        assert_eq!(id.to_string(), "abc123");
        assert_eq!(id.as_str(), "abc123");
    }
}
