//! Calendar-day grouping for the left-pane list
//!
//! Pure transforms: a flat list of session summaries (or search hits) in,
//! day buckets out. Newest day first, newest item first inside a bucket,
//! items without a usable timestamp in a trailing "기타" bucket. Same input
//! always yields the same output, so the unit tests below pin the contract.

use chrono::{DateTime, Utc};

use crate::domain::models::group::OTHER_GROUP;
use crate::domain::models::{DateGroup, SearchHit, SessionSummary};
use crate::shared::logging;

/// Day key used for both session buckets and search-hit buckets.
pub fn date_key(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => OTHER_GROUP.to_string(),
    }
}

/// Group items into day buckets, newest day first, "기타" last.
fn group_by_day<T, F>(items: Vec<T>, time_of: F) -> Vec<DateGroup<T>>
where
    F: Fn(&T) -> Option<DateTime<Utc>>,
{
    let input_count = items.len();
    let mut groups: Vec<DateGroup<T>> = Vec::new();

    for item in items {
        let key = date_key(time_of(&item));
        match groups.iter_mut().find(|g| g.date == key) {
            Some(group) => group.items.push(item),
            None => groups.push(DateGroup { date: key, items: vec![item] }),
        }
    }

    for group in &mut groups {
        group.items.sort_by(|a, b| time_of(b).cmp(&time_of(a)));
    }

    // Day keys are zero-padded, so string order is chronological order.
    groups.sort_by(|a, b| {
        match (a.date.as_str() == OTHER_GROUP, b.date.as_str() == OTHER_GROUP) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            (false, false) => b.date.cmp(&a.date),
        }
    });

    logging::log_grouping_result(input_count, groups.len());
    groups
}

/// Group session summaries by the calendar day of their last activity.
pub fn group_sessions_by_date(sessions: &[SessionSummary]) -> Vec<DateGroup<SessionSummary>> {
    group_by_day(sessions.to_vec(), |s| s.activity_time())
}

/// Group search hits by the calendar day of their `created_at`, using the
/// same key derivation as the session list so both render identically.
pub fn group_hits_by_date(hits: Vec<SearchHit>) -> Vec<DateGroup<SearchHit>> {
    group_by_day(hits, |h| h.created_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ChatRole;

    fn ts(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    fn session(id: i64, last_message_at: Option<&str>, start_time: Option<&str>) -> SessionSummary {
        SessionSummary {
            session_id: id,
            title: format!("session {id}"),
            start_time: start_time.map(ts),
            last_message_at: last_message_at.map(ts),
        }
    }

    fn flatten(groups: Vec<DateGroup<SessionSummary>>) -> Vec<SessionSummary> {
        groups.into_iter().flat_map(|g| g.items).collect()
    }

    #[test]
    fn test_groups_newest_day_first_and_newest_item_first() {
        let sessions = vec![
            session(1, Some("2024-01-02T10:00:00Z"), None),
            session(2, Some("2024-01-01T10:00:00Z"), None),
            session(3, Some("2024-01-02T09:00:00Z"), None),
        ];

        let groups = group_sessions_by_date(&sessions);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, "2024-01-02");
        assert_eq!(
            groups[0].items.iter().map(|s| s.session_id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(groups[1].date, "2024-01-01");
        assert_eq!(groups[1].items[0].session_id, 2);
    }

    #[test]
    fn test_falls_back_to_start_time() {
        let sessions = vec![
            session(1, None, Some("2024-03-05T08:00:00Z")),
            session(2, Some("2024-03-06T08:00:00Z"), Some("2024-03-01T08:00:00Z")),
        ];

        let groups = group_sessions_by_date(&sessions);

        assert_eq!(groups[0].date, "2024-03-06");
        assert_eq!(groups[1].date, "2024-03-05");
    }

    #[test]
    fn test_timestampless_sessions_land_in_trailing_other_bucket() {
        let sessions = vec![
            session(1, None, None),
            session(2, Some("2024-03-06T08:00:00Z"), None),
        ];

        let groups = group_sessions_by_date(&sessions);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, "2024-03-06");
        assert_eq!(groups[1].date, OTHER_GROUP);
        assert_eq!(groups[1].items[0].session_id, 1);
    }

    #[test]
    fn test_idempotent_under_flatten_and_regroup() {
        let sessions = vec![
            session(1, Some("2024-01-02T10:00:00Z"), None),
            session(2, None, None),
            session(3, Some("2024-01-01T10:00:00Z"), None),
            session(4, Some("2024-01-02T09:00:00Z"), None),
        ];

        let once = group_sessions_by_date(&sessions);
        let twice = group_sessions_by_date(&flatten(once.clone()));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_hits_group_with_same_key_rules() {
        let hit = |id: i64, created: Option<&str>| SearchHit {
            session_id: 5,
            chat_id: id,
            role: ChatRole::User,
            content: String::new(),
            created_at: created.map(ts),
        };

        let groups = group_hits_by_date(vec![
            hit(1, Some("2024-05-01T10:00:00Z")),
            hit(2, None),
            hit(3, Some("2024-05-02T10:00:00Z")),
        ]);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].date, "2024-05-02");
        assert_eq!(groups[1].date, "2024-05-01");
        assert_eq!(groups[2].date, OTHER_GROUP);
    }
}
