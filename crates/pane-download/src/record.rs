//! Confirmed download records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRecord {
    /// Where the user chose to save the file
    pub path: PathBuf,
    /// Source URL
    pub url: String,
    pub recorded_at: DateTime<Utc>,
}

impl DownloadRecord {
    pub fn new(path: PathBuf, url: String) -> Self {
        Self {
            path,
            url,
            recorded_at: Utc::now(),
        }
    }

    /// Text shown for this record in the downloads list
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}
