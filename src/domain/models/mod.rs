pub mod group;
pub mod message;
pub mod search;
pub mod session;

pub use group::DateGroup;
pub use message::{ChatRole, Message};
pub use search::SearchHit;
pub use session::{SessionPage, SessionSummary};
