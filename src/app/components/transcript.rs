//! Right pane: the active session's transcript.
//!
//! Scrolling is driven from here: once a transcript finishes loading, the
//! pane either centers the highlight target (arriving from a search hit)
//! or pins to the newest message.

use dioxus::prelude::*;

use crate::domain::models::Message;
use crate::shared::hooks::{SearchState, TranscriptState};
use crate::shared::utils::highlight_segments;
use crate::shared::utils::scroll::{message_element_id, scroll_to_bottom, scroll_to_message};

use super::common::{EmptyState, LoadingText};

#[component]
pub fn TranscriptPane(transcript: Signal<TranscriptState>, search: Signal<SearchState>) -> Element {
    // Scroll after each completed load; the controller waits for the DOM.
    use_effect(move || {
        let current = transcript.read();
        if current.session_id.is_some() && !current.loading {
            match current.highlight {
                Some(chat_id) => scroll_to_message(chat_id),
                None => scroll_to_bottom(),
            }
        }
    });

    let current = transcript.read();
    let keyword = {
        let search_read = search.read();
        if search_read.active { search_read.keyword.clone() } else { String::new() }
    };

    rsx! {
        div { class: "c-transcript",
            if current.session_id.is_none() {
                EmptyState {
                    icon: "📄".to_string(),
                    title: "대화를 선택하세요".to_string(),
                    description: "왼쪽 목록에서 대화를 선택하면 내용이 표시됩니다.".to_string(),
                }
            } else if current.loading {
                LoadingText { message: "대화를 불러오는 중...".to_string() }
            } else {
                div { class: "c-transcript__messages",
                    ul { class: "c-transcript__list",
                        for message in current.messages.iter() {
                            MessageRow {
                                key: "{message.chat_id}",
                                message: message.clone(),
                                keyword: keyword.clone(),
                                is_target: current.highlight == Some(message.chat_id),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: Message, keyword: String, is_target: bool) -> Element {
    let element_id = message_element_id(message.chat_id);
    let mut row_class = format!("c-message c-message--{}", message.role.css_modifier());
    if is_target {
        row_class.push_str(" c-message--highlighted");
    }
    let time_label = message.created_at.map(|ts| ts.format("%H:%M").to_string());
    let segments = highlight_segments(&message.content, &keyword);

    rsx! {
        li { id: "{element_id}", class: "{row_class}",
            // Whitespace-preserving body; content renders verbatim.
            div { class: "c-message__content",
                for segment in segments {
                    if segment.is_match {
                        mark { class: "c-highlight", "{segment.text}" }
                    } else {
                        span { "{segment.text}" }
                    }
                }
            }
            if let Some(time) = time_label {
                span { class: "c-message__timestamp", "{time}" }
            }
        }
    }
}
