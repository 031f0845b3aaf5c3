//! Shared test doubles and builders for themebot integration tests.

#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_editor;

use chrono::Utc;
use themebot::{Chat, Document, Message, User};

pub const CHAT_ID: i64 = 456;

pub fn text_message(text: &str) -> Message {
    Message {
        id: "10".to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        text: text.to_string(),
        document: None,
        created_at: Utc::now(),
    }
}

pub fn document_message(file_name: Option<&str>) -> Message {
    Message {
        document: Some(Document {
            file_id: "file-1".to_string(),
            file_name: file_name.map(str::to_string),
            file_size: 42,
        }),
        text: String::new(),
        ..text_message("")
    }
}
