use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder title for sessions the backend created without one.
pub const DEFAULT_SESSION_TITLE: &str = "새 대화";

/// Lightweight session summary for the left-pane list.
///
/// Read-only on this side: the backend owns the session lifecycle, the
/// browser only removes a summary from its in-memory list after a delete
/// succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: i64,
    pub title: String,
    pub start_time: Option<DateTime<Utc>>,
    pub last_message_at: Option<DateTime<Utc>>,
}

impl SessionSummary {
    /// Timestamp used for ordering and day-bucketing.
    /// `last_message_at` wins, `start_time` is the fallback.
    pub fn activity_time(&self) -> Option<DateTime<Utc>> {
        self.last_message_at.or(self.start_time)
    }

    /// Display title, ellipsized like the session cards expect.
    pub fn display_title(&self, max_chars: usize) -> String {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            return DEFAULT_SESSION_TITLE.to_string();
        }
        if trimmed.chars().count() > max_chars {
            format!("{}...", trimmed.chars().take(max_chars).collect::<String>())
        } else {
            trimmed.to_string()
        }
    }
}

/// One page of session summaries, normalized to a single internal shape
/// regardless of which field aliases the backend used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPage {
    pub items: Vec<SessionSummary>,
    pub next_cursor: Option<i64>,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_titled(title: &str) -> SessionSummary {
        SessionSummary {
            session_id: 1,
            title: title.to_string(),
            start_time: None,
            last_message_at: None,
        }
    }

    #[test]
    fn test_display_title_defaults_when_blank() {
        assert_eq!(summary_titled("").display_title(60), DEFAULT_SESSION_TITLE);
        assert_eq!(summary_titled("   ").display_title(60), DEFAULT_SESSION_TITLE);
    }

    #[test]
    fn test_display_title_ellipsizes_long_titles() {
        let title = "전세 계약서 검토 요청입니다";
        assert_eq!(summary_titled(title).display_title(5), "전세 계약...");
        assert_eq!(summary_titled(title).display_title(60), title);
    }

    #[test]
    fn test_activity_time_prefers_last_message() {
        let start = "2024-05-01T09:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let last = "2024-05-02T09:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let mut summary = summary_titled("t");
        summary.start_time = Some(start);
        assert_eq!(summary.activity_time(), Some(start));
        summary.last_message_at = Some(last);
        assert_eq!(summary.activity_time(), Some(last));
    }
}
