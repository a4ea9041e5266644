use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display role of a chat message.
///
/// The backend stores free-form role markers; anything that is not
/// recognizably the user renders on the assistant side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" | "human" => ChatRole::User,
            _ => ChatRole::Assistant,
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One message inside a session transcript (newest last).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub chat_id: i64,
    pub role: ChatRole,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Synthetic message rendered in place of a transcript that failed to
    /// load, so the right pane always has something to show.
    pub fn load_failure() -> Self {
        Message {
            chat_id: -1,
            role: ChatRole::Assistant,
            content: "⚠️ 대화를 불러올 수 없습니다".to_string(),
            created_at: None,
        }
    }
}
