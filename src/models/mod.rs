mod devotional;
mod library;
mod topic;
mod user_data;

pub use devotional::{Anchor, Devotional, Path};
pub use library::LibraryItem;
pub use topic::Topic;
pub use user_data::{date_key, HistoryEntry, UserData};
