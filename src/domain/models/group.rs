use serde::{Deserialize, Serialize};

/// Bucket label for items without a usable timestamp. Sorts after every
/// calendar-day bucket.
pub const OTHER_GROUP: &str = "기타";

/// Calendar-day bucket the left pane iterates to render a section header
/// followed by its rows. Works for session summaries and search hits alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateGroup<T> {
    pub date: String,
    pub items: Vec<T>,
}
