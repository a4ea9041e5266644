//! Structured logging module for the conversation history browser
//!
//! Provides consistent, contextual logging across the fetch and grouping
//! paths. Uses structured fields so log lines stay greppable.

use crate::shared::errors::AppError;

/// Log operations for the history browser
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SessionPage,
    TranscriptLoad,
    Search,
    SessionCreate,
    SessionDelete,
    Grouping,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SessionPage => "session_page",
            LogOperation::TranscriptLoad => "transcript_load",
            LogOperation::Search => "search",
            LogOperation::SessionCreate => "session_create",
            LogOperation::SessionDelete => "session_delete",
            LogOperation::Grouping => "grouping",
        }
    }
}

/// Log a loaded session page
pub fn log_session_page(count: usize, has_more: bool, first_page: bool) {
    tracing::info!(
        operation = LogOperation::SessionPage.as_str(),
        item_count = count,
        has_more = has_more,
        first_page = first_page,
        "Session page loaded"
    );
}

/// Log a loaded transcript
pub fn log_transcript_loaded(session_id: i64, message_count: usize) {
    tracing::info!(
        operation = LogOperation::TranscriptLoad.as_str(),
        session_id = session_id,
        message_count = message_count,
        "Transcript loaded"
    );
}

/// Log a transcript response discarded by the staleness guard
pub fn log_stale_transcript_dropped(requested: i64, active: Option<i64>) {
    tracing::debug!(
        operation = LogOperation::TranscriptLoad.as_str(),
        requested_session = requested,
        active_session = active,
        "Dropped stale transcript response"
    );
}

/// Log a completed search
pub fn log_search_result(keyword_len: usize, group_count: usize, hit_count: usize) {
    tracing::info!(
        operation = LogOperation::Search.as_str(),
        keyword_chars = keyword_len,
        group_count = group_count,
        hit_count = hit_count,
        "Search completed"
    );
}

/// Log a session removed from the local list
pub fn log_session_deleted(session_id: i64, was_active: bool) {
    tracing::info!(
        operation = LogOperation::SessionDelete.as_str(),
        session_id = session_id,
        was_active = was_active,
        "Session removed from list"
    );
}

/// Log a fetch failure. Distinguishes "had a response" from network-level
/// failure, which is all this client interprets from errors.
pub fn log_fetch_error(operation: LogOperation, error: &AppError) {
    if error.had_response() {
        tracing::error!(
            operation = operation.as_str(),
            error = %error,
            "Backend rejected request"
        );
    } else {
        tracing::error!(
            operation = operation.as_str(),
            error = %error,
            "Request failed before reaching the backend"
        );
    }
}

/// Log a grouping pass over the flat session list
pub fn log_grouping_result(input_count: usize, group_count: usize) {
    tracing::debug!(
        operation = LogOperation::Grouping.as_str(),
        input_items = input_count,
        group_count = group_count,
        "Grouped items by calendar day"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::SessionPage.as_str(), "session_page");
        assert_eq!(LogOperation::TranscriptLoad.as_str(), "transcript_load");
        assert_eq!(LogOperation::Search.as_str(), "search");
        assert_eq!(LogOperation::SessionCreate.as_str(), "session_create");
        assert_eq!(LogOperation::SessionDelete.as_str(), "session_delete");
        assert_eq!(LogOperation::Grouping.as_str(), "grouping");
    }
}
