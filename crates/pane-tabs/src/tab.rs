//! Tab data structures
//!
//! A strip slot is either a navigable tab backed by an engine session, or a
//! placeholder widget that has nothing to navigate (settings pages and the
//! like). Callers branch on the slot variant instead of probing capabilities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::EngineSession;

pub const DEFAULT_ZOOM: f64 = 1.0;

/// Opaque tab handle, stable for the lifetime of the tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
pub struct Tab<S> {
    id: TabId,
    /// Engine session, owned exclusively by this tab
    session: S,
    /// Label shown in the tab strip
    pub label: String,
    /// Page title as last reported by the engine
    pub title: String,
    /// URL as last reported by the engine
    pub current_url: String,
    pub zoom_factor: f64,
    pub created_at: DateTime<Utc>,
}

impl<S: EngineSession> Tab<S> {
    pub(crate) fn new(id: TabId, session: S, url: String, label: String) -> Self {
        Self {
            id,
            session,
            label,
            title: String::new(),
            current_url: url,
            zoom_factor: DEFAULT_ZOOM,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Record a URL reported by the engine.
    ///
    /// The title is reset until the page reports one, so the label falls
    /// back to the URL.
    pub fn record_url(&mut self, url: String) {
        self.current_url = url;
        self.title = String::new();
        self.label = self.current_url.clone();
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.label = self.display_title().to_string();
    }

    /// Get display title (with fallback to URL)
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.current_url
        } else {
            &self.title
        }
    }

    fn close(mut self) {
        tracing::debug!(tab_id = %self.id, url = %self.current_url, "Tearing down engine session");
        self.session.close();
    }
}

#[derive(Debug)]
pub enum TabSlot<S> {
    /// A web tab with its own engine session
    Navigable(Tab<S>),
    /// A non-web widget occupying a strip position
    Placeholder { id: TabId, label: String },
}

impl<S: EngineSession> TabSlot<S> {
    pub fn id(&self) -> TabId {
        match self {
            TabSlot::Navigable(tab) => tab.id(),
            TabSlot::Placeholder { id, .. } => *id,
        }
    }

    pub fn as_tab(&self) -> Option<&Tab<S>> {
        match self {
            TabSlot::Navigable(tab) => Some(tab),
            TabSlot::Placeholder { .. } => None,
        }
    }

    pub fn as_tab_mut(&mut self) -> Option<&mut Tab<S>> {
        match self {
            TabSlot::Navigable(tab) => Some(tab),
            TabSlot::Placeholder { .. } => None,
        }
    }

    pub(crate) fn close(self) {
        if let TabSlot::Navigable(tab) = self {
            tab.close();
        }
    }

    pub(crate) fn summary(&self, is_active: bool) -> TabSummary {
        match self {
            TabSlot::Navigable(tab) => TabSummary {
                id: tab.id(),
                label: tab.label.clone(),
                title: tab.display_title().to_string(),
                url: Some(tab.current_url.clone()),
                zoom_factor: Some(tab.zoom_factor),
                is_active,
            },
            TabSlot::Placeholder { id, label } => TabSummary {
                id: *id,
                label: label.clone(),
                title: label.clone(),
                url: None,
                zoom_factor: None,
                is_active,
            },
        }
    }
}

/// Serializable snapshot of a strip slot, for repainting the chrome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSummary {
    pub id: TabId,
    pub label: String,
    pub title: String,
    pub url: Option<String>,
    pub zoom_factor: Option<f64>,
    pub is_active: bool,
}
