//! Pane Session State
//!
//! The window's cross-tab logs: bookmarks, visited URLs and confirmed
//! downloads. All three are append-only and kept in memory for the life of
//! the process. Entries are never deduplicated or removed.

mod bookmark;
mod history;
mod state;

pub use bookmark::Bookmark;
pub use history::HistoryEntry;
pub use pane_download::DownloadRecord;
pub use state::SessionState;
