//! Conversation history page
//!
//! Two-pane composition: day-grouped session list (or search hits) on the
//! left, active transcript on the right. This page owns the top-level
//! state and every fetch side effect; the panes below it only read
//! signals and raise events.

use dioxus::prelude::*;

use crate::domain::models::SearchHit;
use crate::domain::models::session::DEFAULT_SESSION_TITLE;
use crate::shared::hooks::{HistoryState, SearchAction, classify_keyword, use_history_state};
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::ApiService;
use crate::shared::utils::dialog;

use super::super::components::{Banner, SearchBar, SessionListPane, TranscriptPane};

const PAGE_SIZE: usize = 10;
const TRANSCRIPT_LIMIT: usize = 100;
const SEARCH_SIZE: usize = 30;

#[component]
pub fn HistoryPage(#[props(default)] member_id: Option<String>) -> Element {
    let api = use_hook(|| {
        ApiService::new(member_id.clone().unwrap_or_else(|| "guest".to_string()))
    });
    let mut state = use_history_state();

    // Initial load: first page, then auto-select the newest session.
    {
        let api = api.clone();
        use_future(move || {
            let api = api.clone();
            async move {
                load_first_page(api, state).await;
            }
        });
    }

    let on_select = {
        let api = api.clone();
        move |session_id: i64| {
            let api = api.clone();
            spawn(async move {
                // A plain row selection never carries a highlight target.
                open_session(api, state, session_id, None).await;
            });
        }
    };

    let on_hit_click = {
        let api = api.clone();
        move |hit: SearchHit| {
            let api = api.clone();
            spawn(async move {
                open_session(api, state, hit.session_id, Some(hit.chat_id)).await;
            });
        }
    };

    let on_search_submit = {
        let api = api.clone();
        move |raw: String| match classify_keyword(&raw) {
            SearchAction::Clear => state.search.write().clear(),
            SearchAction::Reject(message) => state.search.write().reject(message),
            SearchAction::Run(keyword) => {
                let api = api.clone();
                spawn(async move {
                    run_search(api, state, keyword).await;
                });
            }
        }
    };

    let on_clear_search = move |_| state.search.write().clear();

    let on_delete = {
        let api = api.clone();
        move |session_id: i64| {
            let api = api.clone();
            spawn(async move {
                delete_session(api, state, session_id).await;
            });
        }
    };

    let on_load_more = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                load_next_page(api, state).await;
            });
        }
    };

    let on_new_session = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                create_session(api, state).await;
            });
        }
    };

    rsx! {
        div { class: "c-history-page",
            if let Some(message) = state.banner.read().clone() {
                Banner {
                    message,
                    on_dismiss: move |_| state.dismiss_banner(),
                }
            }

            div { class: "c-history-page__layout",
                aside { class: "c-history-page__sidebar",
                    div { class: "c-history-page__actions",
                        button {
                            class: "c-btn c-btn--primary c-btn--sm",
                            onclick: on_new_session,
                            "+ 새 대화"
                        }
                    }

                    SearchBar {
                        search: state.search,
                        on_submit: on_search_submit,
                        on_clear: on_clear_search,
                    }

                    SessionListPane {
                        store: state.store,
                        transcript: state.transcript,
                        search: state.search,
                        on_select,
                        on_hit_click,
                        on_delete,
                        on_load_more,
                    }
                }

                section { class: "c-history-page__transcript",
                    TranscriptPane {
                        transcript: state.transcript,
                        search: state.search,
                    }
                }
            }
        }
    }
}

async fn load_first_page(api: ApiService, mut state: HistoryState) {
    if !state.store.write().begin_load() {
        return;
    }
    match api.fetch_session_page(PAGE_SIZE, None).await {
        Ok(page) => {
            logging::log_session_page(page.items.len(), page.has_more, true);
            let first_session = page.items.first().map(|s| s.session_id);
            state.store.write().apply_first_page(page);
            if let Some(session_id) = first_session {
                if state.transcript.read().session_id.is_none() {
                    open_session(api, state, session_id, None).await;
                }
            }
        }
        Err(error) => {
            logging::log_fetch_error(LogOperation::SessionPage, &error);
            state.store.write().fail();
            state.show_banner("대화 목록을 불러오지 못했습니다");
        }
    }
}

async fn load_next_page(api: ApiService, mut state: HistoryState) {
    let search_active = state.search.read().active;
    if !state.store.read().can_load_next(search_active) {
        return;
    }
    let cursor = state.store.read().cursor;
    if !state.store.write().begin_load() {
        return;
    }
    match api.fetch_session_page(PAGE_SIZE, cursor).await {
        Ok(page) => {
            logging::log_session_page(page.items.len(), page.has_more, false);
            state.store.write().apply_next_page(page);
        }
        Err(error) => {
            logging::log_fetch_error(LogOperation::SessionPage, &error);
            state.store.write().fail();
            state.show_banner("다음 페이지를 불러오지 못했습니다");
        }
    }
}

async fn open_session(api: ApiService, mut state: HistoryState, session_id: i64, highlight: Option<i64>) {
    state.transcript.write().select(session_id, highlight);
    match api.fetch_messages(session_id, TRANSCRIPT_LIMIT).await {
        Ok(messages) => {
            let count = messages.len();
            if state.transcript.write().apply(session_id, messages) {
                logging::log_transcript_loaded(session_id, count);
            } else {
                logging::log_stale_transcript_dropped(session_id, state.transcript.read().session_id);
            }
        }
        Err(error) => {
            logging::log_fetch_error(LogOperation::TranscriptLoad, &error);
            if state.transcript.write().fail(session_id) {
                state.show_banner("대화를 불러오지 못했습니다");
            }
        }
    }
}

async fn run_search(api: ApiService, mut state: HistoryState, keyword: String) {
    state.search.write().begin(keyword.clone());
    match api.search_messages(&keyword, SEARCH_SIZE).await {
        Ok(groups) => {
            let hit_count = groups.iter().map(|g| g.items.len()).sum();
            logging::log_search_result(keyword.chars().count(), groups.len(), hit_count);
            state.search.write().apply(groups);
        }
        Err(error) => {
            logging::log_fetch_error(LogOperation::Search, &error);
            state.search.write().fail();
            state.show_banner("검색에 실패했습니다");
        }
    }
}

async fn delete_session(api: ApiService, mut state: HistoryState, session_id: i64) {
    // No optimistic removal: the row only disappears once the server
    // confirmed the delete.
    match api.delete_session(session_id).await {
        Ok(()) => {
            let was_active = state.transcript.read().session_id == Some(session_id);
            state.store.write().remove(session_id);
            if was_active {
                state.transcript.write().clear();
            }
            logging::log_session_deleted(session_id, was_active);
        }
        Err(error) => {
            logging::log_fetch_error(LogOperation::SessionDelete, &error);
            // The user just confirmed a destructive action; a blocking
            // alert, not the dismissible fetch banner.
            dialog::alert("대화를 삭제하지 못했습니다");
        }
    }
}

async fn create_session(api: ApiService, mut state: HistoryState) {
    match api.create_session(DEFAULT_SESSION_TITLE).await {
        Ok(summary) => {
            let session_id = summary.session_id;
            state.store.write().prepend(summary);
            // A fresh session starts in list mode.
            state.search.write().clear();
            open_session(api, state, session_id, None).await;
        }
        Err(error) => {
            logging::log_fetch_error(LogOperation::SessionCreate, &error);
            state.show_banner("새 대화를 만들지 못했습니다");
        }
    }
}
