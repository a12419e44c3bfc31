//! Session state container
//!
//! A cheap-to-clone handle over the three logs. The event loop is the only
//! writer; the lock keeps appends in delivery order should a host ever
//! touch the state from more than one thread.

use parking_lot::RwLock;
use std::sync::Arc;

use pane_download::DownloadRecord;

use crate::bookmark::Bookmark;
use crate::history::HistoryEntry;

#[derive(Debug, Default)]
struct Logs {
    bookmarks: Vec<Bookmark>,
    history: Vec<HistoryEntry>,
    downloads: Vec<DownloadRecord>,
}

#[derive(Debug, Default)]
pub struct SessionState {
    logs: Arc<RwLock<Logs>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bookmark exactly as confirmed.
    ///
    /// Returns `None` without touching the log when either the name or the
    /// URL is blank.
    pub fn add_bookmark(&self, name: &str, url: &str) -> Option<Bookmark> {
        if name.trim().is_empty() || url.trim().is_empty() {
            tracing::debug!(name = %name, url = %url, "Ignoring bookmark with blank field");
            return None;
        }

        let bookmark = Bookmark::new(name.to_string(), url.to_string());
        self.logs.write().bookmarks.push(bookmark.clone());

        tracing::info!(name = %bookmark.name, url = %bookmark.url, "Added bookmark");

        Some(bookmark)
    }

    /// Record a completed navigation of the active tab
    pub fn record_visit(&self, url: &str) -> HistoryEntry {
        let entry = HistoryEntry::new(url.to_string());
        self.logs.write().history.push(entry.clone());

        tracing::debug!(url = %url, "Recorded history entry");

        entry
    }

    pub fn record_download(&self, record: DownloadRecord) {
        tracing::debug!(path = %record.path.display(), "Recorded download");
        self.logs.write().downloads.push(record);
    }

    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.logs.read().bookmarks.clone()
    }

    pub fn bookmark(&self, index: usize) -> Option<Bookmark> {
        self.logs.read().bookmarks.get(index).cloned()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.logs.read().history.clone()
    }

    pub fn history_entry(&self, index: usize) -> Option<HistoryEntry> {
        self.logs.read().history.get(index).cloned()
    }

    pub fn downloads(&self) -> Vec<DownloadRecord> {
        self.logs.read().downloads.clone()
    }

    pub fn download(&self, index: usize) -> Option<DownloadRecord> {
        self.logs.read().downloads.get(index).cloned()
    }

    pub fn bookmark_count(&self) -> usize {
        self.logs.read().bookmarks.len()
    }

    pub fn history_len(&self) -> usize {
        self.logs.read().history.len()
    }

    pub fn download_count(&self) -> usize {
        self.logs.read().downloads.len()
    }
}

impl Clone for SessionState {
    fn clone(&self) -> Self {
        Self {
            logs: Arc::clone(&self.logs),
        }
    }
}
