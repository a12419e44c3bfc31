//! Pane Core
//!
//! Window-level coordination for the browser shell: the tab registry, the
//! navigation bridge, chrome sync and the session logs, driven from one
//! event loop.

mod bridge;
mod browser;
mod chrome;
mod config;
mod error;

pub use bridge::{NavigationBridge, SAVE_PROMPT_TITLE};
pub use browser::{
    Browser, ADD_BOOKMARK_TITLE, BOOKMARKS_TITLE, BOOKMARK_NAME_LABEL, BOOKMARK_TAB_LABEL,
    DOWNLOADS_TITLE, HISTORY_TAB_LABEL, HISTORY_TITLE, NEW_TAB_LABEL, START_PAGE_LABEL,
};
pub use chrome::{Chrome, ChromeSync, PromptResponse};
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use pane_download::{DownloadRecord, DownloadRequest};
pub use pane_navigation::{normalize_address, NavigationError, NavigationIntent, ZoomPolicy};
pub use pane_session::{Bookmark, HistoryEntry, SessionState};
pub use pane_tabs::{
    CloseOutcome, Engine, EngineSession, RegistryState, Tab, TabError, TabId, TabRegistry,
    TabSlot, TabSummary,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
