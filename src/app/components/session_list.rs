//! Left pane: day-grouped session list, or day-grouped search hits when
//! search mode is active. Infinite "load more" only applies to the
//! session list; search results arrive as one batch.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use dioxus::prelude::*;

use crate::domain::models::{SearchHit, SessionSummary};
use crate::shared::hooks::{SearchState, SessionStoreState, TranscriptState};
use crate::shared::utils::{group_sessions_by_date, highlight_segments};

use super::common::{EmptyState, SessionsLoading};

const TITLE_MAX_CHARS: usize = 60;
const PREVIEW_MAX_CHARS: usize = 80;

/// Relative time label for a list row (e.g. "5분 전", "어제", "3월 15일").
fn format_relative_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let diff = *now - *timestamp;
    let date = timestamp.date_naive();
    let today = now.date_naive();
    let yesterday = today - Duration::days(1);

    if diff.num_minutes() < 1 {
        "방금 전".to_string()
    } else if diff.num_minutes() < 60 {
        format!("{}분 전", diff.num_minutes())
    } else if diff.num_hours() < 24 && date == today {
        format!("{}시간 전", diff.num_hours())
    } else if date == yesterday {
        "어제".to_string()
    } else {
        format!("{}월 {}일", timestamp.month(), timestamp.day())
    }
}

/// Day-header label: today and yesterday render as words, every other key
/// (including "기타") renders as-is.
fn format_group_label(date_key: &str, today: NaiveDate) -> String {
    match NaiveDate::parse_from_str(date_key, "%Y-%m-%d") {
        Ok(date) if date == today => "오늘".to_string(),
        Ok(date) if date == today - Duration::days(1) => "어제".to_string(),
        _ => date_key.to_string(),
    }
}

#[component]
pub fn SessionListPane(
    store: Signal<SessionStoreState>,
    transcript: Signal<TranscriptState>,
    search: Signal<SearchState>,
    on_select: EventHandler<i64>,
    on_hit_click: EventHandler<SearchHit>,
    on_delete: EventHandler<i64>,
    on_load_more: EventHandler,
) -> Element {
    if search.read().active {
        return rsx! {
            SearchResultList { search, on_hit_click }
        };
    }

    let store_read = store.read();
    let groups = group_sessions_by_date(&store_read.sessions);
    let loading = store_read.loading;
    let has_more = store_read.has_more;
    let is_empty = store_read.sessions.is_empty();
    let active_id = transcript.read().session_id;
    let today = Utc::now().date_naive();
    drop(store_read);

    rsx! {
        div { class: "c-sessions",
            if loading && is_empty {
                SessionsLoading {}
            } else if is_empty {
                EmptyState {
                    icon: "💬".to_string(),
                    title: "대화 내역이 없습니다".to_string(),
                    description: "새 대화를 시작하면 여기에 표시됩니다.".to_string(),
                }
            } else {
                for group in groups {
                    div { class: "c-sessions__group-header", {format_group_label(&group.date, today)} }
                    for session in group.items {
                        SessionRow {
                            key: "{session.session_id}",
                            session: session.clone(),
                            is_active: active_id == Some(session.session_id),
                            on_select,
                            on_delete,
                        }
                    }
                }

                if has_more {
                    button {
                        class: "c-btn c-btn--ghost c-sessions__load-more",
                        disabled: loading,
                        onclick: move |_| on_load_more.call(()),
                        if loading { "불러오는 중..." } else { "더 보기" }
                    }
                }
            }
        }
    }
}

#[component]
fn SessionRow(
    session: SessionSummary,
    is_active: bool,
    on_select: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let mut show_confirm = use_signal(|| false);
    let session_id = session.session_id;
    let title = session.display_title(TITLE_MAX_CHARS);
    let now = Utc::now();
    let relative_time = session
        .activity_time()
        .map(|ts| format_relative_time(&ts, &now))
        .unwrap_or_default();

    let row_class = if is_active {
        "c-session-item c-session-item--active"
    } else {
        "c-session-item"
    };

    rsx! {
        if *show_confirm.read() {
            div { class: "c-session-item",
                div { class: "c-session-item__confirm-overlay",
                    span { class: "c-session-item__confirm-text", "삭제할까요?" }
                    button {
                        class: "c-session-item__confirm-btn c-session-item__confirm-btn--danger",
                        onclick: move |_| {
                            show_confirm.set(false);
                            on_delete.call(session_id);
                        },
                        "삭제"
                    }
                    button {
                        class: "c-session-item__confirm-btn c-session-item__confirm-btn--cancel",
                        onclick: move |_| show_confirm.set(false),
                        "취소"
                    }
                }
            }
        } else {
            button {
                class: "{row_class}",
                onclick: move |_| on_select.call(session_id),

                div { class: "c-session-item__icon", "💬" }

                div { class: "c-session-item__content",
                    div { class: "c-session-item__title", "{title}" }
                }

                div { class: "c-session-item__time", "{relative_time}" }

                // Delete affordance (shown on hover via CSS)
                span {
                    class: "c-session-item__delete",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        evt.prevent_default();
                        show_confirm.set(true);
                    },
                    "🗑️"
                }
            }
        }
    }
}

#[component]
fn SearchResultList(search: Signal<SearchState>, on_hit_click: EventHandler<SearchHit>) -> Element {
    let search_read = search.read();
    let groups = search_read.groups.clone();
    let keyword = search_read.keyword.clone();
    let searching = search_read.searching;
    let today = Utc::now().date_naive();
    drop(search_read);

    rsx! {
        div { class: "c-sessions c-sessions--search",
            if searching {
                SessionsLoading {}
            } else if groups.is_empty() {
                EmptyState {
                    icon: "🔍".to_string(),
                    title: "검색 결과가 없습니다".to_string(),
                    description: "다른 검색어로 다시 시도해보세요.".to_string(),
                }
            } else {
                for group in groups {
                    div { class: "c-sessions__group-header", {format_group_label(&group.date, today)} }
                    for hit in group.items {
                        SearchHitRow {
                            key: "{hit.session_id}-{hit.chat_id}",
                            hit: hit.clone(),
                            keyword: keyword.clone(),
                            on_hit_click,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchHitRow(hit: SearchHit, keyword: String, on_hit_click: EventHandler<SearchHit>) -> Element {
    let preview: String = if hit.content.chars().count() > PREVIEW_MAX_CHARS {
        format!("{}...", hit.content.chars().take(PREVIEW_MAX_CHARS).collect::<String>())
    } else {
        hit.content.clone()
    };
    let segments = highlight_segments(&preview, &keyword);
    let time_label = hit
        .created_at
        .map(|ts| ts.format("%H:%M").to_string())
        .unwrap_or_default();
    let hit_for_click = hit.clone();

    rsx! {
        button {
            class: "c-session-item c-session-item--hit",
            onclick: move |_| on_hit_click.call(hit_for_click.clone()),

            div { class: "c-session-item__icon", "🔍" }

            div { class: "c-session-item__content",
                div { class: "c-session-item__title",
                    for segment in segments {
                        if segment.is_match {
                            mark { class: "c-highlight", "{segment.text}" }
                        } else {
                            span { "{segment.text}" }
                        }
                    }
                }
            }

            div { class: "c-session-item__time", "{time_label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = ts("2024-05-15T12:00:00Z");
        assert_eq!(format_relative_time(&ts("2024-05-15T11:59:40Z"), &now), "방금 전");
        assert_eq!(format_relative_time(&ts("2024-05-15T11:45:00Z"), &now), "15분 전");
        assert_eq!(format_relative_time(&ts("2024-05-15T09:00:00Z"), &now), "3시간 전");
        assert_eq!(format_relative_time(&ts("2024-05-14T09:00:00Z"), &now), "어제");
        assert_eq!(format_relative_time(&ts("2024-03-15T09:00:00Z"), &now), "3월 15일");
    }

    #[test]
    fn test_group_labels() {
        let today = ts("2024-05-15T12:00:00Z").date_naive();
        assert_eq!(format_group_label("2024-05-15", today), "오늘");
        assert_eq!(format_group_label("2024-05-14", today), "어제");
        assert_eq!(format_group_label("2024-05-01", today), "2024-05-01");
        assert_eq!(format_group_label("기타", today), "기타");
    }
}
