use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Loading variant for the session list
#[component]
pub fn SessionsLoading() -> Element {
    rsx! {
        div { class: "c-loading c-loading--sessions",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "대화 목록을 불러오는 중..." }
        }
    }
}

/// Dismissible failure banner. Fetch errors land here; the rest of the
/// view stays interactive underneath.
#[component]
pub fn Banner(message: String, on_dismiss: EventHandler) -> Element {
    rsx! {
        div { class: "c-banner c-banner--error",
            span { class: "c-banner__icon", "⚠️" }
            span { class: "c-banner__text", "{message}" }
            button {
                class: "c-banner__dismiss",
                onclick: move |_| on_dismiss.call(()),
                "✕"
            }
        }
    }
}

// Reusable Empty State Component
#[component]
pub fn EmptyState(icon: String, title: String, description: String) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div { class: "c-empty-state__icon", "{icon}" }
            div { class: "c-empty-state__title", "{title}" }
            div { class: "c-empty-state__description", "{description}" }
        }
    }
}
