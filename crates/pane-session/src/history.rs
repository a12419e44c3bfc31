//! History entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(url: String) -> Self {
        Self {
            url,
            visited_at: Utc::now(),
        }
    }
}
