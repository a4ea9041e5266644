pub mod common;
pub mod search_bar;
pub mod session_list;
pub mod transcript;

pub use common::{Banner, EmptyState, LoadingText, SessionsLoading};
pub use search_bar::SearchBar;
pub use session_list::SessionListPane;
pub use transcript::TranscriptPane;
