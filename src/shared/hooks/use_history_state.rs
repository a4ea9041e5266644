//! History browser state
//!
//! The three plain structs below hold every field the page mutates; each
//! fetch path is a pair of explicit transitions (begin, apply-or-fail) so
//! the sequencing rules live here and unit-test without a DOM:
//!
//! - the session store serializes "load next page" against itself,
//! - the transcript applies a response only when its session id still
//!   matches the active one (last-request-wins by relevance),
//! - search state flips between list mode and search mode without touching
//!   the already-loaded session list.
//!
//! `use_history_state` wraps them in signals for the components.

use dioxus::prelude::*;

use crate::domain::models::{DateGroup, Message, SearchHit, SessionPage, SessionSummary};

/// Minimum keyword length accepted by the search endpoint.
pub const MIN_KEYWORD_CHARS: usize = 2;

/// Validation message shown inline under the search input.
pub const KEYWORD_TOO_SHORT: &str = "검색어는 2자 이상 입력해주세요";

/// In-memory session list with its cursor-pagination bookkeeping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStoreState {
    pub sessions: Vec<SessionSummary>,
    pub cursor: Option<i64>,
    pub has_more: bool,
    pub loading: bool,
}

impl SessionStoreState {
    /// Mark a fetch in flight. Returns false when one already is, which
    /// makes a second `load_next_page` a no-op instead of a double append.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Whether "load more" may fire at all: nothing in flight, not in
    /// search mode, and the backend said there is more.
    pub fn can_load_next(&self, search_active: bool) -> bool {
        !self.loading && !search_active && self.has_more
    }

    /// First page replaces everything and resets the cursor.
    pub fn apply_first_page(&mut self, page: SessionPage) {
        self.sessions = page.items;
        self.cursor = page.next_cursor;
        self.has_more = page.has_more;
        self.loading = false;
    }

    /// Later pages append and advance the cursor.
    pub fn apply_next_page(&mut self, page: SessionPage) {
        self.sessions.extend(page.items);
        self.cursor = page.next_cursor;
        self.has_more = page.has_more;
        self.loading = false;
    }

    /// A failed fetch leaves previously loaded items untouched.
    pub fn fail(&mut self) {
        self.loading = false;
    }

    /// Remove a deleted session. Returns false when the id was not listed.
    pub fn remove(&mut self, session_id: i64) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.session_id != session_id);
        self.sessions.len() != before
    }

    /// Newly created sessions go on top.
    pub fn prepend(&mut self, summary: SessionSummary) {
        self.sessions.insert(0, summary);
    }
}

/// The right pane: one active transcript at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranscriptState {
    pub session_id: Option<i64>,
    pub messages: Vec<Message>,
    pub loading: bool,
    /// Message to center after the next load; None scrolls to the bottom.
    pub highlight: Option<i64>,
}

impl TranscriptState {
    /// Activate a session and start loading its transcript.
    pub fn select(&mut self, session_id: i64, highlight: Option<i64>) {
        self.session_id = Some(session_id);
        self.highlight = highlight;
        self.messages.clear();
        self.loading = true;
    }

    /// Apply a transcript response. A response for a session that is no
    /// longer active is discarded; the platform does not order responses
    /// for us, so this guard is the cancellation substitute.
    pub fn apply(&mut self, session_id: i64, messages: Vec<Message>) -> bool {
        if self.session_id != Some(session_id) {
            return false;
        }
        self.messages = messages;
        self.loading = false;
        true
    }

    /// Failure path, under the same staleness guard: render a synthetic
    /// error message instead of a blank pane.
    pub fn fail(&mut self, session_id: i64) -> bool {
        self.apply(session_id, vec![Message::load_failure()])
    }

    /// Back to "no session selected".
    pub fn clear(&mut self) {
        *self = TranscriptState::default();
    }
}

/// Search mode state. Mutually exclusive with the plain session list; the
/// list (and its cursor) stays loaded underneath while search is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Last keyword whose results are on screen; also drives highlighting.
    pub keyword: String,
    pub active: bool,
    pub groups: Vec<DateGroup<SearchHit>>,
    pub searching: bool,
    pub validation: Option<&'static str>,
    /// Keyword of the in-flight search. Committed to `keyword` only when
    /// results arrive, so a failed search never relabels old results.
    pending: Option<String>,
}

impl SearchState {
    pub fn begin(&mut self, keyword: String) {
        self.pending = Some(keyword);
        self.searching = true;
        self.validation = None;
    }

    pub fn apply(&mut self, groups: Vec<DateGroup<SearchHit>>) {
        if let Some(keyword) = self.pending.take() {
            self.keyword = keyword;
        }
        self.groups = groups;
        self.active = true;
        self.searching = false;
    }

    /// A failed search keeps the previous keyword and results intact.
    pub fn fail(&mut self) {
        self.pending = None;
        self.searching = false;
    }

    pub fn reject(&mut self, message: &'static str) {
        self.validation = Some(message);
    }

    /// Exit search mode entirely.
    pub fn clear(&mut self) {
        *self = SearchState::default();
    }
}

/// What a submitted keyword should do, decided before any network call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    /// Empty keyword: leave search mode, keep the session list as-is.
    Clear,
    /// Below the minimum length: inline validation, no request.
    Reject(&'static str),
    /// Trimmed keyword to send to the backend.
    Run(String),
}

pub fn classify_keyword(raw: &str) -> SearchAction {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return SearchAction::Clear;
    }
    if trimmed.chars().count() < MIN_KEYWORD_CHARS {
        return SearchAction::Reject(KEYWORD_TOO_SHORT);
    }
    SearchAction::Run(trimmed.to_string())
}

/// Signal bundle the page and panes share. The store list/cursor are only
/// written through `SessionStoreState` methods, the active session and
/// highlight target only through `TranscriptState`; no two writers share a
/// field.
#[derive(Clone, Copy, PartialEq)]
pub struct HistoryState {
    pub store: Signal<SessionStoreState>,
    pub transcript: Signal<TranscriptState>,
    pub search: Signal<SearchState>,
    /// Dismissible fetch-failure banner.
    pub banner: Signal<Option<String>>,
}

impl HistoryState {
    pub fn show_banner(&mut self, message: impl Into<String>) {
        self.banner.set(Some(message.into()));
    }

    pub fn dismiss_banner(&mut self) {
        self.banner.set(None);
    }
}

/// Hook to create the history browser state
pub fn use_history_state() -> HistoryState {
    let store = use_signal(SessionStoreState::default);
    let transcript = use_signal(TranscriptState::default);
    let search = use_signal(SearchState::default);
    let banner = use_signal(|| None::<String>);

    HistoryState { store, transcript, search, banner }
}
