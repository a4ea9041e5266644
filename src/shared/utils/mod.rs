pub mod dialog;
pub mod grouping;
pub mod highlight;
pub mod normalize;
pub mod scroll;

pub use dialog::alert;
pub use grouping::{date_key, group_hits_by_date, group_sessions_by_date};
pub use highlight::{HighlightSegment, highlight_segments};
pub use normalize::{normalize_messages, normalize_search_groups, normalize_session_page, normalize_session_summary};
pub use scroll::{scroll_to_bottom, scroll_to_message};
