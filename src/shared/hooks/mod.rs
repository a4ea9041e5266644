// Custom Dioxus hooks and the plain state structs behind them
pub mod use_history_state;

pub use use_history_state::{
    HistoryState, SearchAction, SearchState, SessionStoreState, TranscriptState, classify_keyword,
    use_history_state,
};
