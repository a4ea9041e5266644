//! Search bar component
//!
//! Submit-only: the keyword goes to the owner on Enter or the button,
//! never per keystroke. Validation messages render inline, not as a
//! banner.

use dioxus::prelude::*;

use crate::shared::hooks::SearchState;

#[component]
pub fn SearchBar(
    search: Signal<SearchState>,
    on_submit: EventHandler<String>,
    on_clear: EventHandler,
) -> Element {
    let mut input = use_signal(String::new);
    let searching = search.read().searching;

    rsx! {
        div { class: "c-search-bar",
            div { class: "c-search-bar__form",
                input {
                    r#type: "text",
                    class: "c-search-bar__input",
                    placeholder: "대화 내용 검색...",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                    onkeypress: move |evt| {
                        if evt.key() == Key::Enter {
                            on_submit.call(input());
                        }
                    },
                }

                button {
                    class: "c-btn c-btn--primary c-btn--sm",
                    onclick: move |_| on_submit.call(input()),
                    disabled: searching,
                    if searching { "검색 중..." } else { "검색" }
                }

                if search.read().active {
                    button {
                        class: "c-btn c-btn--ghost c-btn--sm",
                        onclick: move |_| {
                            input.set(String::new());
                            on_clear.call(());
                        },
                        "✕"
                    }
                }
            }

            if let Some(message) = search.read().validation {
                p { class: "c-search-bar__validation", "{message}" }
            }
        }
    }
}
