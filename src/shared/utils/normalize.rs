//! Tolerant response normalization
//!
//! The backend has drifted through several field-naming conventions, so
//! every fetch result passes through exactly one boundary function here
//! that maps whichever alias set is present onto the canonical structs in
//! `domain::models`. The alias lists are data, not scattered `if`s; adding
//! a new backend spelling means adding one string to one slice.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::domain::models::{ChatRole, DateGroup, Message, SearchHit, SessionPage, SessionSummary};
use crate::shared::utils::grouping::group_hits_by_date;

const SESSION_LIST_KEYS: &[&str] = &["items", "sessions", "content", "list", "data"];
const CURSOR_KEYS: &[&str] = &["nextCursor", "next_cursor", "cursor", "lastId", "last_id"];
const HAS_MORE_KEYS: &[&str] = &["hasMore", "has_more", "hasNext", "has_next"];

const SESSION_ID_KEYS: &[&str] = &["sessionId", "session_id", "id"];
const TITLE_KEYS: &[&str] = &["title", "sessionTitle", "name"];
const START_TIME_KEYS: &[&str] = &["startTime", "start_time", "createdAt", "created_at"];
const LAST_MESSAGE_KEYS: &[&str] = &["lastMessageAt", "last_message_at", "lastMessageTime", "updatedAt", "updated_at"];

const MESSAGE_LIST_KEYS: &[&str] = &["messages", "items", "data"];
const CHAT_ID_KEYS: &[&str] = &["chatId", "chat_id", "messageId", "message_id", "id"];
const ROLE_KEYS: &[&str] = &["role", "sender", "type"];
const CONTENT_KEYS: &[&str] = &["content", "message", "text"];
const CREATED_AT_KEYS: &[&str] = &["createdAt", "created_at", "timestamp", "time"];

const SEARCH_GROUP_LIST_KEYS: &[&str] = &["results", "items", "data", "groups"];
const SEARCH_HIT_LIST_KEYS: &[&str] = &["results", "items", "messages"];
const GROUP_DATE_KEYS: &[&str] = &["date", "day", "groupKey", "group_key"];

/// First non-null value under any of the accepted keys.
fn first_present<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| value.get(key))
        .find(|v| !v.is_null())
}

fn field_i64(value: &Value, keys: &[&str]) -> Option<i64> {
    let v = first_present(value, keys)?;
    v.as_i64().or_else(|| v.as_str().and_then(|s| s.parse().ok()))
}

fn field_str<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    first_present(value, keys).and_then(|v| v.as_str())
}

fn field_bool(value: &Value, keys: &[&str]) -> Option<bool> {
    first_present(value, keys).and_then(|v| v.as_bool())
}

fn field_array<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    first_present(value, keys).and_then(|v| v.as_array())
}

/// Parse the timestamp spellings the backend emits: RFC3339, naive
/// date-time (no zone, "T" or space separated), or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    tracing::warn!(timestamp = raw, "Unparseable timestamp in response");
    None
}

fn field_timestamp(value: &Value, keys: &[&str]) -> Option<DateTime<Utc>> {
    field_str(value, keys).and_then(parse_timestamp)
}

/// Normalize one raw session object. Objects without any recognizable id
/// are dropped (and logged) rather than rendered as broken rows.
pub fn normalize_session_summary(raw: &Value) -> Option<SessionSummary> {
    let Some(session_id) = field_i64(raw, SESSION_ID_KEYS) else {
        tracing::warn!("Dropping session object without an id");
        return None;
    };
    Some(SessionSummary {
        session_id,
        title: field_str(raw, TITLE_KEYS).unwrap_or_default().to_string(),
        start_time: field_timestamp(raw, START_TIME_KEYS),
        last_message_at: field_timestamp(raw, LAST_MESSAGE_KEYS),
    })
}

/// Normalize one page of the cursor-paginated session list.
///
/// When the has-more flag is absent under every alias it is derived from
/// the page being full: `items.len() == page_size`.
pub fn normalize_session_page(raw: &Value, page_size: usize) -> SessionPage {
    let raw_items: Vec<Value> = match raw.as_array() {
        Some(array) => array.clone(),
        None => field_array(raw, SESSION_LIST_KEYS).cloned().unwrap_or_default(),
    };

    let items: Vec<SessionSummary> = raw_items.iter().filter_map(normalize_session_summary).collect();
    let next_cursor = field_i64(raw, CURSOR_KEYS);
    let has_more = field_bool(raw, HAS_MORE_KEYS).unwrap_or(items.len() == page_size);

    SessionPage { items, next_cursor, has_more }
}

/// Normalize a transcript. Missing content becomes an empty string, an
/// unknown role renders as assistant, and a missing id falls back to the
/// position index so rows stay addressable for scroll targeting.
pub fn normalize_messages(raw: &Value) -> Vec<Message> {
    let raw_items: Vec<Value> = match raw.as_array() {
        Some(array) => array.clone(),
        None => field_array(raw, MESSAGE_LIST_KEYS).cloned().unwrap_or_default(),
    };

    raw_items
        .iter()
        .enumerate()
        .map(|(index, item)| Message {
            chat_id: field_i64(item, CHAT_ID_KEYS).unwrap_or(index as i64),
            role: ChatRole::from_raw(field_str(item, ROLE_KEYS).unwrap_or_default()),
            content: field_str(item, CONTENT_KEYS).unwrap_or_default().to_string(),
            created_at: field_timestamp(item, CREATED_AT_KEYS),
        })
        .collect()
}

fn normalize_search_hit(raw: &Value, group_time: Option<DateTime<Utc>>) -> Option<SearchHit> {
    let Some(session_id) = field_i64(raw, &["sessionId", "session_id"]) else {
        tracing::warn!("Dropping search hit without a session id");
        return None;
    };
    Some(SearchHit {
        session_id,
        chat_id: field_i64(raw, CHAT_ID_KEYS).unwrap_or_default(),
        role: ChatRole::from_raw(field_str(raw, ROLE_KEYS).unwrap_or_default()),
        content: field_str(raw, CONTENT_KEYS).unwrap_or_default().to_string(),
        created_at: field_timestamp(raw, CREATED_AT_KEYS).or(group_time),
    })
}

/// Normalize a search response and regroup it with the session-list date
/// rules. The backend sends date-grouped hit lists; hits keep their own
/// `createdAt` when present and inherit the server group key otherwise,
/// so a hit without either lands in the "기타" bucket.
pub fn normalize_search_groups(raw: &Value) -> Vec<DateGroup<SearchHit>> {
    let raw_groups: Vec<Value> = match raw.as_array() {
        Some(array) => array.clone(),
        None => field_array(raw, SEARCH_GROUP_LIST_KEYS).cloned().unwrap_or_default(),
    };

    let mut hits: Vec<SearchHit> = Vec::new();
    for group in &raw_groups {
        match field_array(group, SEARCH_HIT_LIST_KEYS) {
            Some(raw_hits) => {
                let group_time = field_str(group, GROUP_DATE_KEYS).and_then(parse_timestamp);
                hits.extend(raw_hits.iter().filter_map(|h| normalize_search_hit(h, group_time)));
            }
            // Some responses skip the grouping envelope and send bare hits.
            None => hits.extend(normalize_search_hit(group, None)),
        }
    }

    group_hits_by_date(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_page_accepts_item_aliases() {
        for key in ["items", "sessions", "content", "list", "data"] {
            let raw = json!({ key: [{"sessionId": 7, "title": "계약 검토"}] });
            let page = normalize_session_page(&raw, 10);
            assert_eq!(page.items.len(), 1, "alias {key} not accepted");
            assert_eq!(page.items[0].session_id, 7);
        }
    }

    #[test]
    fn test_session_page_accepts_cursor_and_has_more_aliases() {
        let raw = json!({"items": [], "next_cursor": 42, "has_next": true});
        let page = normalize_session_page(&raw, 10);
        assert_eq!(page.next_cursor, Some(42));
        assert!(page.has_more);

        let raw = json!({"items": [], "lastId": "17", "hasMore": false});
        let page = normalize_session_page(&raw, 10);
        assert_eq!(page.next_cursor, Some(17));
        assert!(!page.has_more);
    }

    #[test]
    fn test_has_more_derived_from_full_page() {
        let full: Vec<Value> = (0..10).map(|i| json!({"id": i})).collect();
        let page = normalize_session_page(&json!({"items": full}), 10);
        assert!(page.has_more);

        let page = normalize_session_page(&json!({"items": [{"id": 1}]}), 10);
        assert!(!page.has_more);
    }

    #[test]
    fn test_session_summary_field_fallbacks() {
        let raw = json!({
            "session_id": 3,
            "createdAt": "2024-01-02T10:00:00",
            "updatedAt": "2024-01-03 11:30:00"
        });
        let summary = normalize_session_summary(&raw).unwrap();
        assert_eq!(summary.session_id, 3);
        assert_eq!(summary.title, "");
        assert_eq!(summary.start_time, Some("2024-01-02T10:00:00Z".parse().unwrap()));
        assert_eq!(summary.last_message_at, Some("2024-01-03T11:30:00Z".parse().unwrap()));

        assert!(normalize_session_summary(&json!({"title": "no id"})).is_none());
    }

    #[test]
    fn test_message_defaults() {
        let raw = json!({"messages": [
            {"chatId": 9, "role": "user", "content": "안녕하세요", "createdAt": "2024-05-01T10:00:00Z"},
            {"role": "weird-role"},
        ]});
        let messages = normalize_messages(&raw);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].chat_id, 9);
        assert_eq!(messages[0].role, ChatRole::User);

        // Defaults: positional id, assistant role, empty content, no timestamp.
        assert_eq!(messages[1].chat_id, 1);
        assert_eq!(messages[1].role, ChatRole::Assistant);
        assert_eq!(messages[1].content, "");
        assert_eq!(messages[1].created_at, None);
    }

    #[test]
    fn test_messages_accept_bare_array() {
        let raw = json!([{"id": 1, "text": "hello"}]);
        let messages = normalize_messages(&raw);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "hello");
    }

    #[test]
    fn test_search_groups_inherit_server_date_key() {
        // Scenario: one server group, hit carries no createdAt of its own.
        let raw = json!([{
            "date": "2024-05-01",
            "results": [{"sessionId": 5, "chatId": 99, "role": "user", "content": "전세 계약 문의"}]
        }]);
        let groups = normalize_search_groups(&raw);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].date, "2024-05-01");
        assert_eq!(groups[0].items.len(), 1);
        assert_eq!(groups[0].items[0].session_id, 5);
        assert_eq!(groups[0].items[0].chat_id, 99);
        assert_eq!(groups[0].items[0].content, "전세 계약 문의");
    }

    #[test]
    fn test_search_groups_accept_hit_list_aliases_and_regroup() {
        let raw = json!({"results": [
            {"date": "2024-05-01", "items": [
                {"sessionId": 1, "chatId": 1, "content": "a", "createdAt": "2024-05-02T09:00:00Z"}
            ]},
            {"date": "2024-05-01", "messages": [
                {"sessionId": 2, "chatId": 2, "content": "b"}
            ]}
        ]});
        let groups = normalize_search_groups(&raw);
        // Hit with its own createdAt moves to its real day, the other keeps
        // the server key.
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, "2024-05-02");
        assert_eq!(groups[1].date, "2024-05-01");
    }

    #[test]
    fn test_search_hit_without_session_id_is_dropped() {
        let raw = json!([{
            "date": "2024-05-01",
            "results": [
                {"chatId": 1, "content": "no session reference"},
                {"sessionId": 5, "chatId": 2, "content": "kept"}
            ]
        }]);
        let groups = normalize_search_groups(&raw);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items.len(), 1);
        assert_eq!(groups[0].items[0].chat_id, 2);
    }

    #[test]
    fn test_timestamp_spellings() {
        assert!(parse_timestamp("2024-01-02T10:00:00Z").is_some());
        assert!(parse_timestamp("2024-01-02T10:00:00+09:00").is_some());
        assert!(parse_timestamp("2024-01-02T10:00:00").is_some());
        assert!(parse_timestamp("2024-01-02 10:00:00").is_some());
        assert!(parse_timestamp("2024-01-02").is_some());
        assert!(parse_timestamp("not a time").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
