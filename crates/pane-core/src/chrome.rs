//! Chrome: the shared window surface (tab strip, address bar, dialogs)
//!
//! The toolkit draws the widgets and owns the event loop. [`ChromeSync`]
//! keeps what it shows derived from the registry and never holds state of
//! its own.

use std::path::{Path, PathBuf};

use pane_tabs::{Engine, EngineSession, TabId, TabRegistry, TabSlot};

/// Answer from a modal text prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Confirmed(String),
    Cancelled,
}

impl PromptResponse {
    pub fn into_text(self) -> Option<String> {
        match self {
            PromptResponse::Confirmed(text) => Some(text),
            PromptResponse::Cancelled => None,
        }
    }
}

/// UI toolkit primitives used by the browser.
///
/// Prompts block until the user answers. Implementations must not call
/// back into the browser from inside these methods; toolkit events raised
/// while one runs (`currentChanged` after `set_current_strip_index`, for
/// instance) have to be queued and delivered afterwards.
pub trait Chrome {
    /// Append a widget to the tab strip and return its strip index
    fn add_tab_widget(&mut self, label: &str) -> usize;

    fn remove_tab_widget(&mut self, index: usize);

    fn set_current_strip_index(&mut self, index: usize);

    fn set_tab_label(&mut self, index: usize, label: &str);

    fn address_bar_text(&self) -> String;

    fn set_address_bar_text(&mut self, text: &str);

    fn clear_address_bar(&mut self) {
        self.set_address_bar_text("");
    }

    fn prompt_text(&mut self, title: &str, label: &str) -> PromptResponse;

    /// Ask where to save a file. `None` (or an empty path) means cancelled.
    fn prompt_save_path(&mut self, title: &str, default_path: &Path) -> Option<PathBuf>;

    /// Show a list dialog and return the index of the item the user opened
    fn show_list(&mut self, title: &str, items: &[String]) -> Option<usize>;

    fn notify(&mut self, title: &str, message: &str);

    /// Hand a downloaded file to the platform's default application
    fn open_path(&mut self, path: &Path);

    fn close_window(&mut self);
}

pub struct ChromeSync<C: Chrome> {
    chrome: C,
}

impl<C: Chrome> ChromeSync<C> {
    pub fn new(chrome: C) -> Self {
        Self { chrome }
    }

    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    pub fn chrome_mut(&mut self) -> &mut C {
        &mut self.chrome
    }

    /// Repopulate the address bar from the newly active slot.
    ///
    /// Placeholders (and a missing slot) clear the bar.
    pub fn on_active_tab_changed<S: EngineSession>(&mut self, slot: Option<&TabSlot<S>>) {
        match slot.and_then(TabSlot::as_tab) {
            Some(tab) => self.chrome.set_address_bar_text(&tab.current_url),
            None => self.chrome.clear_address_bar(),
        }
    }

    /// Show `url` in the address bar if `tab_id` is the active tab.
    ///
    /// Returns false, leaving the bar alone, for background tabs.
    pub fn on_tab_navigated<E: Engine>(
        &mut self,
        registry: &TabRegistry<E>,
        tab_id: TabId,
        url: &str,
    ) -> bool {
        if !registry.is_active(tab_id) {
            tracing::debug!(tab_id = %tab_id, url = %url, "Background tab navigated, address bar untouched");
            return false;
        }

        self.chrome.set_address_bar_text(url);
        true
    }

    /// Mirror a slot appended at `index` and make it current
    pub fn tab_added(&mut self, index: usize, label: &str) {
        let strip_index = self.chrome.add_tab_widget(label);
        if strip_index != index {
            tracing::warn!(strip_index, index, "Tab strip out of step with registry");
        }
        self.chrome.set_current_strip_index(index);
    }

    pub fn tab_removed(&mut self, index: usize) {
        self.chrome.remove_tab_widget(index);
    }

    pub fn current_changed(&mut self, index: usize) {
        self.chrome.set_current_strip_index(index);
    }

    pub fn label_changed(&mut self, index: usize, label: &str) {
        self.chrome.set_tab_label(index, label);
    }
}
