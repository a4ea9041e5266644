use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::ChatRole;

/// One full-text search match across the member's message history.
///
/// Carries the same display fields as a transcript message plus the
/// back-reference to its owning session, so a click can open the
/// transcript and scroll to the hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub session_id: i64,
    pub chat_id: i64,
    pub role: ChatRole,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}
