use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(name: String, url: String) -> Self {
        Self { name, url }
    }

    /// Text shown for this bookmark in the bookmarks list
    pub fn list_label(&self) -> String {
        format!("{}: {}", self.name, self.url)
    }
}
