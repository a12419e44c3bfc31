//! Navigation intents raised by the toolbar, menus and address bar

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum NavigationIntent {
    Back,
    Forward,
    Reload,
    /// Raw address bar text, normalized before it reaches the engine
    NavigateTo(String),
    ZoomIn,
    ZoomOut,
    ZoomReset,
}

impl NavigationIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationIntent::Back => "back",
            NavigationIntent::Forward => "forward",
            NavigationIntent::Reload => "reload",
            NavigationIntent::NavigateTo(_) => "navigate_to",
            NavigationIntent::ZoomIn => "zoom_in",
            NavigationIntent::ZoomOut => "zoom_out",
            NavigationIntent::ZoomReset => "zoom_reset",
        }
    }
}

impl std::fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
