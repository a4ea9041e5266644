pub mod components;
pub mod pages;

use dioxus::prelude::*;

pub use pages::HistoryPage;

#[component]
pub fn App() -> Element {
    rsx! {
        HistoryPage {}
    }
}
