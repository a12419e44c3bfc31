//! Rendering engine seam
//!
//! The engine itself (layout, scripting, network) lives outside this crate.
//! The registry only creates sessions, hands them to their tab, and tears
//! them down when the tab goes away.

use crate::tab::TabId;

pub trait Engine {
    type Session: EngineSession;

    /// Start a rendering session loading `url`.
    ///
    /// `tab_id` is the tab that will own the session, so the host can route
    /// `urlChanged` / `downloadRequested` callbacks back to it.
    fn create_session(&mut self, tab_id: TabId, url: &str) -> Self::Session;
}

pub trait EngineSession {
    fn navigate(&mut self, url: &str);

    fn go_back(&mut self);

    fn go_forward(&mut self);

    fn reload(&mut self);

    /// Apply a zoom factor and return the factor the engine settled on
    fn set_zoom(&mut self, factor: f64) -> f64;

    fn current_url(&self) -> String;

    /// Called exactly once, right before the owning tab is dropped
    fn close(&mut self) {}
}
