//! Browser window
//!
//! Owns the tab registry, the session logs and the chrome, and serializes
//! every toolbar intent, toolkit event and engine callback into one
//! consistent view of the window. Methods take `&mut self`, so a modal
//! prompt holds off every other mutation until it returns.

use pane_download::{DownloadRecord, DownloadRequest};
use pane_navigation::NavigationIntent;
use pane_session::{Bookmark, SessionState};
use pane_tabs::{CloseOutcome, Engine, RegistryState, Tab, TabId, TabRegistry, TabSummary};

use crate::bridge::NavigationBridge;
use crate::chrome::{Chrome, ChromeSync};
use crate::config::Config;
use crate::Result;

pub const START_PAGE_LABEL: &str = "Start Page";
pub const NEW_TAB_LABEL: &str = "New Tab";
pub const BOOKMARK_TAB_LABEL: &str = "Bookmark";
pub const HISTORY_TAB_LABEL: &str = "History";

pub const ADD_BOOKMARK_TITLE: &str = "Add Bookmark";
pub const BOOKMARK_NAME_LABEL: &str = "Bookmark name:";
pub const BOOKMARKS_TITLE: &str = "Bookmarks";
pub const HISTORY_TITLE: &str = "History";
pub const DOWNLOADS_TITLE: &str = "Downloads";

pub struct Browser<E: Engine, C: Chrome> {
    config: Config,
    registry: TabRegistry<E>,
    chrome: ChromeSync<C>,
    session: SessionState,
}

impl<E: Engine, C: Chrome> Browser<E, C> {
    /// Open the window with a single tab on the start page
    pub fn new(config: Config, engine: E, chrome: C) -> Result<Self> {
        config.validate()?;

        let registry = TabRegistry::new(engine, config.start_page_url.clone(), START_PAGE_LABEL);
        let mut browser = Self {
            config,
            registry,
            chrome: ChromeSync::new(chrome),
            session: SessionState::new(),
        };

        browser.chrome.tab_added(0, START_PAGE_LABEL);
        browser
            .chrome
            .on_active_tab_changed(browser.registry.active_slot());

        tracing::info!(
            title = %browser.config.window_title,
            start_page = %browser.config.start_page_url,
            "Browser window opened"
        );

        Ok(browser)
    }

    // === Accessors ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &TabRegistry<E> {
        &self.registry
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn chrome(&self) -> &C {
        self.chrome.chrome()
    }

    pub fn chrome_mut(&mut self) -> &mut C {
        self.chrome.chrome_mut()
    }

    pub fn state(&self) -> RegistryState {
        self.registry.state()
    }

    pub fn is_running(&self) -> bool {
        self.registry.is_running()
    }

    pub fn active_tab(&self) -> Option<&Tab<E::Session>> {
        self.registry.active_tab()
    }

    pub fn tabs(&self) -> Vec<TabSummary> {
        self.registry.summaries()
    }

    /// Borrow the window's parts for one navigation intent or engine callback
    pub fn navigation(&mut self) -> NavigationBridge<'_, E, C> {
        NavigationBridge::new(
            &mut self.registry,
            &mut self.chrome,
            &self.session,
            &self.config,
        )
    }

    // === Tab operations ===

    /// Open `url` (the start page if empty) in a new active tab
    pub fn create_tab(&mut self, url: &str, label: &str) -> Result<TabId> {
        let id = self.registry.create_tab(url, label)?;
        let index = self.registry.len() - 1;

        self.chrome.tab_added(index, label);
        self.chrome.on_active_tab_changed(self.registry.active_slot());

        Ok(id)
    }

    pub fn new_tab(&mut self) -> Result<TabId> {
        self.create_tab("", NEW_TAB_LABEL)
    }

    /// Open a non-web widget in the strip
    pub fn open_placeholder(&mut self, label: &str) -> Result<TabId> {
        let id = self.registry.insert_placeholder(label)?;
        let index = self.registry.len() - 1;

        self.chrome.tab_added(index, label);
        self.chrome.on_active_tab_changed(self.registry.active_slot());

        Ok(id)
    }

    pub fn close_tab(&mut self, tab_id: TabId) -> Result<CloseOutcome> {
        let outcome = self.registry.close_tab(tab_id)?;
        self.apply_close(outcome);
        Ok(outcome)
    }

    /// Toolkit event: the close button of strip slot `index` was clicked
    pub fn on_tab_close_requested(&mut self, index: usize) -> Result<CloseOutcome> {
        let outcome = self.registry.close_at(index)?;
        self.apply_close(outcome);
        Ok(outcome)
    }

    /// Make strip slot `index` active and show it
    pub fn activate(&mut self, index: usize) -> Result<()> {
        self.registry.set_active(index)?;
        self.chrome.current_changed(index);
        self.chrome.on_active_tab_changed(self.registry.active_slot());
        Ok(())
    }

    /// Toolkit event: the user switched strip slots
    pub fn on_current_index_changed(&mut self, index: usize) -> Result<()> {
        if !self.is_running() {
            tracing::debug!(index, "Window closed, ignoring strip change");
            return Ok(());
        }

        let slot = self.registry.set_active(index)?;
        self.chrome.on_active_tab_changed(Some(slot));
        Ok(())
    }

    fn apply_close(&mut self, outcome: CloseOutcome) {
        match outcome {
            CloseOutcome::Closed { index, active } => {
                self.chrome.tab_removed(index);
                self.chrome.current_changed(active);
                self.chrome.on_active_tab_changed(self.registry.active_slot());
            }
            CloseOutcome::Shutdown => {
                tracing::info!("Closing browser window");
                self.chrome.chrome_mut().close_window();
            }
        }
    }

    // === Navigation ===

    pub fn dispatch(&mut self, intent: NavigationIntent) -> bool {
        self.navigation().dispatch(intent)
    }

    /// Navigate the active tab to whatever is typed in the address bar
    pub fn navigate_from_address_bar(&mut self) -> Option<String> {
        let text = self.chrome.chrome().address_bar_text();
        self.navigation().navigate_to(&text)
    }

    pub fn on_url_changed(&mut self, tab_id: TabId, url: &str) -> bool {
        self.navigation().on_url_changed(tab_id, url)
    }

    pub fn on_title_changed(&mut self, tab_id: TabId, title: &str) {
        self.navigation().on_title_changed(tab_id, title)
    }

    pub fn on_download_requested<R>(&mut self, tab_id: TabId, request: &mut R) -> Option<DownloadRecord>
    where
        R: DownloadRequest + ?Sized,
    {
        self.navigation().on_download_requested(tab_id, request)
    }

    // === Bookmarks, history, downloads ===

    /// Bookmark the address bar's URL under a name the user types in.
    ///
    /// Cancelling the prompt or leaving the name blank adds nothing.
    pub fn add_bookmark(&mut self) -> Option<Bookmark> {
        if !self.is_running() {
            return None;
        }

        let url = self.chrome.chrome().address_bar_text();
        let name = self
            .chrome
            .chrome_mut()
            .prompt_text(ADD_BOOKMARK_TITLE, BOOKMARK_NAME_LABEL)
            .into_text()?;

        let bookmark = self.session.add_bookmark(&name, &url)?;
        self.chrome.chrome_mut().notify(
            "Bookmark Added",
            &format!("Bookmark '{}' saved!", bookmark.name),
        );

        Some(bookmark)
    }

    /// Show the bookmarks list; the one the user opens loads in a new tab
    pub fn show_bookmarks(&mut self) -> Result<Option<TabId>> {
        let items: Vec<String> = self
            .session
            .bookmarks()
            .iter()
            .map(Bookmark::list_label)
            .collect();

        match self.pick(BOOKMARKS_TITLE, &items) {
            Some(index) => self.open_bookmark(index),
            None => Ok(None),
        }
    }

    pub fn open_bookmark(&mut self, index: usize) -> Result<Option<TabId>> {
        match self.session.bookmark(index) {
            Some(bookmark) => Ok(Some(self.create_tab(&bookmark.url, BOOKMARK_TAB_LABEL)?)),
            None => Ok(None),
        }
    }

    /// Show visited URLs; the one the user opens loads in a new tab
    pub fn show_history(&mut self) -> Result<Option<TabId>> {
        let items: Vec<String> = self
            .session
            .history()
            .into_iter()
            .map(|entry| entry.url)
            .collect();

        match self.pick(HISTORY_TITLE, &items) {
            Some(index) => self.open_history_entry(index),
            None => Ok(None),
        }
    }

    pub fn open_history_entry(&mut self, index: usize) -> Result<Option<TabId>> {
        match self.session.history_entry(index) {
            Some(entry) => Ok(Some(self.create_tab(&entry.url, HISTORY_TAB_LABEL)?)),
            None => Ok(None),
        }
    }

    /// Show confirmed downloads; the one the user opens is handed to the platform
    pub fn show_downloads(&mut self) -> Option<DownloadRecord> {
        let items: Vec<String> = self
            .session
            .downloads()
            .iter()
            .map(DownloadRecord::display_path)
            .collect();

        let index = self.pick(DOWNLOADS_TITLE, &items)?;
        let record = self.session.download(index)?;
        self.chrome.chrome_mut().open_path(&record.path);
        Some(record)
    }

    fn pick(&mut self, title: &str, items: &[String]) -> Option<usize> {
        if !self.is_running() {
            return None;
        }
        self.chrome.chrome_mut().show_list(title, items)
    }
}
