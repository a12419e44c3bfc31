//! Navigation bridge
//!
//! Outbound: turns toolbar and menu intents into calls on the active tab's
//! engine session. Inbound: routes engine callbacks to the tab that raised
//! them, the address bar and the session logs.
//!
//! The bridge borrows the window's parts for the duration of one intent or
//! callback, so nothing else can mutate them while a prompt is open.

use pane_download::{accept_download, suggest_save_path, DownloadRecord, DownloadRequest};
use pane_navigation::{normalize_address, NavigationIntent, ZoomPolicy};
use pane_session::SessionState;
use pane_tabs::{Engine, EngineSession, Tab, TabId, TabRegistry};

use crate::chrome::{Chrome, ChromeSync};
use crate::config::Config;

pub const SAVE_PROMPT_TITLE: &str = "Save File";

pub struct NavigationBridge<'a, E: Engine, C: Chrome> {
    registry: &'a mut TabRegistry<E>,
    chrome: &'a mut ChromeSync<C>,
    session: &'a SessionState,
    config: &'a Config,
}

impl<'a, E: Engine, C: Chrome> NavigationBridge<'a, E, C> {
    pub fn new(
        registry: &'a mut TabRegistry<E>,
        chrome: &'a mut ChromeSync<C>,
        session: &'a SessionState,
        config: &'a Config,
    ) -> Self {
        Self {
            registry,
            chrome,
            session,
            config,
        }
    }

    /// Run `intent` against the active tab.
    ///
    /// Returns false when there is no navigable active tab (or the address
    /// was blank) and nothing happened.
    pub fn dispatch(&mut self, intent: NavigationIntent) -> bool {
        match intent {
            NavigationIntent::Back => self.back(),
            NavigationIntent::Forward => self.forward(),
            NavigationIntent::Reload => self.reload(),
            NavigationIntent::NavigateTo(raw) => self.navigate_to(&raw).is_some(),
            NavigationIntent::ZoomIn => self.zoom_in().is_some(),
            NavigationIntent::ZoomOut => self.zoom_out().is_some(),
            NavigationIntent::ZoomReset => self.zoom_reset().is_some(),
        }
    }

    pub fn back(&mut self) -> bool {
        self.with_active_tab(&NavigationIntent::Back, |tab| tab.session_mut().go_back())
            .is_some()
    }

    pub fn forward(&mut self) -> bool {
        self.with_active_tab(&NavigationIntent::Forward, |tab| {
            tab.session_mut().go_forward()
        })
        .is_some()
    }

    pub fn reload(&mut self) -> bool {
        self.with_active_tab(&NavigationIntent::Reload, |tab| tab.session_mut().reload())
            .is_some()
    }

    /// Normalize `raw` and load it in the active tab.
    ///
    /// Returns the URL handed to the engine.
    pub fn navigate_to(&mut self, raw: &str) -> Option<String> {
        let intent = NavigationIntent::NavigateTo(raw.to_string());
        let Some(url) = normalize_address(raw) else {
            tracing::debug!("Blank address, nothing to navigate to");
            return None;
        };

        self.with_active_tab(&intent, |tab| {
            tracing::debug!(tab_id = %tab.id(), url = %url, "Navigating");
            tab.session_mut().navigate(&url);
            url
        })
    }

    pub fn zoom_in(&mut self) -> Option<f64> {
        self.apply_zoom(NavigationIntent::ZoomIn, ZoomPolicy::zoom_in)
    }

    pub fn zoom_out(&mut self) -> Option<f64> {
        self.apply_zoom(NavigationIntent::ZoomOut, ZoomPolicy::zoom_out)
    }

    pub fn zoom_reset(&mut self) -> Option<f64> {
        self.apply_zoom(NavigationIntent::ZoomReset, |policy, _| policy.reset())
    }

    /// Engine callback: `tab_id` now shows `url`.
    ///
    /// The tab's own URL and strip label are always updated. The address
    /// bar and history only follow the active tab. Returns whether the
    /// address bar was synced.
    pub fn on_url_changed(&mut self, tab_id: TabId, url: &str) -> bool {
        let Some(index) = self.registry.position(tab_id) else {
            tracing::debug!(tab_id = %tab_id, url = %url, "Dropping URL change from closed tab");
            return false;
        };
        let Some(tab) = self.registry.tab_mut(tab_id) else {
            return false;
        };
        tab.record_url(url.to_string());
        self.chrome.label_changed(index, &tab.label);

        if !self.chrome.on_tab_navigated(&*self.registry, tab_id, url) {
            return false;
        }

        self.session.record_visit(url);
        true
    }

    /// Engine callback: the page in `tab_id` reported its title
    pub fn on_title_changed(&mut self, tab_id: TabId, title: &str) {
        let Some(index) = self.registry.position(tab_id) else {
            tracing::debug!(tab_id = %tab_id, "Dropping title change from closed tab");
            return;
        };
        let Some(tab) = self.registry.tab_mut(tab_id) else {
            return;
        };

        tab.set_title(title.to_string());
        self.chrome.label_changed(index, &tab.label);
    }

    /// Engine callback: a page in `tab_id` started a download.
    ///
    /// Prompts for a save location. The download is only accepted and
    /// recorded if the user picks one.
    pub fn on_download_requested<R>(&mut self, tab_id: TabId, request: &mut R) -> Option<DownloadRecord>
    where
        R: DownloadRequest + ?Sized,
    {
        if self.registry.tab(tab_id).is_none() {
            tracing::debug!(tab_id = %tab_id, "Dropping download request from closed tab");
            return None;
        }

        let default_path = suggest_save_path(
            &self.config.download_dir,
            &request.suggested_path(),
            &request.url(),
        );

        let chosen = self
            .chrome
            .chrome_mut()
            .prompt_save_path(SAVE_PROMPT_TITLE, &default_path)
            .filter(|path| !path.as_os_str().is_empty());

        let Some(path) = chosen else {
            tracing::debug!(tab_id = %tab_id, url = %request.url(), "Save prompt cancelled");
            return None;
        };

        let record = accept_download(request, path);
        self.session.record_download(record.clone());
        Some(record)
    }

    fn apply_zoom<F>(&mut self, intent: NavigationIntent, step: F) -> Option<f64>
    where
        F: FnOnce(&ZoomPolicy, f64) -> f64,
    {
        let policy = self.config.zoom;
        self.with_active_tab(&intent, |tab| {
            let target = step(&policy, tab.zoom_factor);
            tab.zoom_factor = tab.session_mut().set_zoom(target);
            tracing::debug!(tab_id = %tab.id(), zoom = tab.zoom_factor, "Zoom changed");
            tab.zoom_factor
        })
    }

    fn with_active_tab<T, F>(&mut self, intent: &NavigationIntent, f: F) -> Option<T>
    where
        F: FnOnce(&mut Tab<E::Session>) -> T,
    {
        match self.registry.active_tab_mut() {
            Some(tab) => Some(f(tab)),
            None => {
                tracing::debug!(intent = %intent, "No navigable active tab, ignoring intent");
                None
            }
        }
    }
}
