//! API Service for centralized HTTP requests
//!
//! Thin fetch layer over the conversation backend. Raw JSON goes straight
//! into the `normalize` boundary so callers only ever see canonical
//! shapes. The caller identity is injected at construction instead of
//! being read from ambient browser storage, which keeps the service
//! testable with fabricated identities.

use serde_json::Value;

use crate::domain::models::{DateGroup, Message, SearchHit, SessionPage, SessionSummary};
use crate::shared::errors::{AppError, Result};
use crate::shared::utils::{
    normalize_messages, normalize_search_groups, normalize_session_page, normalize_session_summary,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiService {
    base_url: String,
    member_id: String,
}

fn sessions_path(size: usize, cursor: Option<i64>) -> String {
    match cursor {
        Some(cursor) => format!("/api/sessions?size={size}&cursor={cursor}"),
        None => format!("/api/sessions?size={size}"),
    }
}

fn messages_path(session_id: i64, limit: usize) -> String {
    format!("/api/sessions/{session_id}/messages?limit={limit}")
}

fn search_path(keyword: &str, size: usize) -> String {
    format!("/api/messages/search?keyword={}&size={size}", urlencoding::encode(keyword))
}

impl ApiService {
    /// Same-origin service for the given member.
    pub fn new(member_id: impl Into<String>) -> Self {
        Self { base_url: String::new(), member_id: member_id.into() }
    }

    pub fn with_base_url(base_url: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), member_id: member_id.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Load one page of the member's session summaries.
    pub async fn fetch_session_page(&self, size: usize, cursor: Option<i64>) -> Result<SessionPage> {
        let raw = self.get_json(&sessions_path(size, cursor)).await?;
        Ok(normalize_session_page(&raw, size))
    }

    /// Load the ordered transcript of one session (newest last).
    pub async fn fetch_messages(&self, session_id: i64, limit: usize) -> Result<Vec<Message>> {
        let raw = self.get_json(&messages_path(session_id, limit)).await?;
        Ok(normalize_messages(&raw))
    }

    /// Full-text search across the member's message history, already
    /// regrouped by calendar day.
    pub async fn search_messages(&self, keyword: &str, size: usize) -> Result<Vec<DateGroup<SearchHit>>> {
        let raw = self.get_json(&search_path(keyword, size)).await?;
        Ok(normalize_search_groups(&raw))
    }

    /// Start a new conversation session.
    pub async fn create_session(&self, title: &str) -> Result<SessionSummary> {
        let body = serde_json::json!({ "title": title });
        let raw = self.post_json("/api/sessions", &body).await?;
        normalize_session_summary(&raw)
            .ok_or_else(|| AppError::MalformedResponse("created session without an id".into()))
    }

    /// Soft-delete on the server; the caller removes it from the local list.
    pub async fn delete_session(&self, session_id: i64) -> Result<()> {
        self.delete(&format!("/api/sessions/{session_id}")).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn get_json(&self, path: &str) -> Result<Value> {
        let response = gloo_net::http::Request::get(&self.url(path))
            .header("X-Member-Id", &self.member_id)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Http { status: response.status() });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get_json(&self, path: &str) -> Result<Value> {
        let _ = self.url(path);
        Err(AppError::Network("fetch is only available in the browser".into()))
    }

    #[cfg(target_arch = "wasm32")]
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let response = gloo_net::http::Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .header("X-Member-Id", &self.member_id)
            .body(serde_json::to_string(body)?)
            .map_err(|e| AppError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Http { status: response.status() });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let _ = (self.url(path), body);
        Err(AppError::Network("fetch is only available in the browser".into()))
    }

    #[cfg(target_arch = "wasm32")]
    async fn delete(&self, path: &str) -> Result<()> {
        let response = gloo_net::http::Request::delete(&self.url(path))
            .header("X-Member-Id", &self.member_id)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Http { status: response.status() });
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn delete(&self, path: &str) -> Result<()> {
        let _ = self.url(path);
        Err(AppError::Network("fetch is only available in the browser".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_path_with_and_without_cursor() {
        assert_eq!(sessions_path(10, None), "/api/sessions?size=10");
        assert_eq!(sessions_path(10, Some(123)), "/api/sessions?size=10&cursor=123");
    }

    #[test]
    fn test_search_path_encodes_keyword() {
        assert_eq!(
            search_path("전세 계약", 30),
            "/api/messages/search?keyword=%EC%A0%84%EC%84%B8%20%EA%B3%84%EC%95%BD&size=30"
        );
    }

    #[test]
    fn test_url_joins_base() {
        let api = ApiService::with_base_url("http://localhost:8080/", "member-1");
        assert_eq!(api.url("/api/sessions"), "http://localhost:8080/api/sessions");

        let same_origin = ApiService::new("member-1");
        assert_eq!(same_origin.url("/api/sessions"), "/api/sessions");
    }
}
