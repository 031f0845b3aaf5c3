//! User identity type for core messages.

/// Sender identity (id, username, names). Only used for logging.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
