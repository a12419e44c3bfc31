//! Tab Registry
//!
//! Owns the window's strip slots in display order plus the active index.
//! While the registry is running it always holds at least one slot and the
//! active index always points into it. Closing the last slot terminates the
//! window instead of leaving it empty.

use crate::engine::Engine;
use crate::error::TabError;
use crate::state::RegistryState;
use crate::tab::{Tab, TabId, TabSlot, TabSummary};
use crate::Result;

/// What happened to the window after a close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The slot at `index` was removed; `active` is the active index afterwards
    Closed { index: usize, active: usize },
    /// The last slot was closed and the window has terminated
    Shutdown,
}

pub struct TabRegistry<E: Engine> {
    engine: E,
    /// Strip slots, insertion order is display order
    slots: Vec<TabSlot<E::Session>>,
    active: Option<usize>,
    state: RegistryState,
    /// URL loaded when a tab is created without one
    start_page: String,
}

impl<E: Engine> TabRegistry<E> {
    /// Open a window with one active tab on `start_page`
    pub fn new(engine: E, start_page: impl Into<String>, label: &str) -> Self {
        let mut registry = Self {
            engine,
            slots: Vec::new(),
            active: None,
            state: RegistryState::Running,
            start_page: start_page.into(),
        };
        registry.open_tab("", label);
        registry
    }

    pub fn state(&self) -> RegistryState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn start_page(&self) -> &str {
        &self.start_page
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn slots(&self) -> &[TabSlot<E::Session>] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&TabSlot<E::Session>> {
        self.slots.get(index)
    }

    pub fn position(&self, tab_id: TabId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id() == tab_id)
    }

    pub fn is_active(&self, tab_id: TabId) -> bool {
        self.active_slot().map(|slot| slot.id()) == Some(tab_id)
    }

    pub fn tab(&self, tab_id: TabId) -> Option<&Tab<E::Session>> {
        self.slots
            .iter()
            .find(|slot| slot.id() == tab_id)
            .and_then(TabSlot::as_tab)
    }

    pub fn tab_mut(&mut self, tab_id: TabId) -> Option<&mut Tab<E::Session>> {
        self.slots
            .iter_mut()
            .find(|slot| slot.id() == tab_id)
            .and_then(TabSlot::as_tab_mut)
    }

    pub fn active_slot(&self) -> Option<&TabSlot<E::Session>> {
        self.active.and_then(|index| self.slots.get(index))
    }

    /// The active tab, or `None` if the active slot is a placeholder or the
    /// window has terminated
    pub fn active_tab(&self) -> Option<&Tab<E::Session>> {
        self.active_slot().and_then(TabSlot::as_tab)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut Tab<E::Session>> {
        let index = self.active?;
        self.slots.get_mut(index).and_then(TabSlot::as_tab_mut)
    }

    pub fn summaries(&self) -> Vec<TabSummary> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| slot.summary(self.active == Some(index)))
            .collect()
    }

    /// Open a new tab at the end of the strip and make it active.
    ///
    /// An empty `url` loads the start page.
    pub fn create_tab(&mut self, url: &str, label: &str) -> Result<TabId> {
        self.ensure_running()?;
        Ok(self.open_tab(url, label))
    }

    /// Append a non-web slot and make it active
    pub fn insert_placeholder(&mut self, label: &str) -> Result<TabId> {
        self.ensure_running()?;

        let id = TabId::new();
        let index = self.push_slot(TabSlot::Placeholder {
            id,
            label: label.to_string(),
        });

        tracing::info!(tab_id = %id, index, label = %label, "Inserted placeholder slot");

        Ok(id)
    }

    /// Make the slot at `index` the active one
    pub fn set_active(&mut self, index: usize) -> Result<&TabSlot<E::Session>> {
        self.ensure_running()?;

        let len = self.slots.len();
        if index >= len {
            return Err(TabError::IndexOutOfRange { index, len });
        }

        if self.active != Some(index) {
            tracing::debug!(from = ?self.active, to = index, "Active tab changed");
            self.active = Some(index);
        }

        Ok(&self.slots[index])
    }

    pub fn close_tab(&mut self, tab_id: TabId) -> Result<CloseOutcome> {
        self.ensure_running()?;

        let index = self.position(tab_id).ok_or(TabError::NotFound(tab_id))?;
        self.close_at(index)
    }

    /// Close the slot at `index`.
    ///
    /// If it was active, the slot that moves into its position becomes
    /// active, or the previous one when it was the last in the strip.
    pub fn close_at(&mut self, index: usize) -> Result<CloseOutcome> {
        self.ensure_running()?;

        let len = self.slots.len();
        if index >= len {
            return Err(TabError::IndexOutOfRange { index, len });
        }

        if len == 1 {
            self.shutdown();
            return Ok(CloseOutcome::Shutdown);
        }

        let slot = self.slots.remove(index);
        let tab_id = slot.id();
        slot.close();

        let last = self.slots.len() - 1;
        let active = match self.active {
            Some(current) if current > index => current - 1,
            Some(current) if current < index => current,
            // The closed slot was active (or nothing was)
            _ => index.min(last),
        };
        self.active = Some(active);

        tracing::info!(tab_id = %tab_id, index, active, "Closed tab");

        Ok(CloseOutcome::Closed { index, active })
    }

    fn open_tab(&mut self, url: &str, label: &str) -> TabId {
        let url = match url.trim() {
            "" => self.start_page.clone(),
            url => url.to_string(),
        };

        let id = TabId::new();
        let session = self.engine.create_session(id, &url);
        let index = self.push_slot(TabSlot::Navigable(Tab::new(
            id,
            session,
            url.clone(),
            label.to_string(),
        )));

        tracing::info!(tab_id = %id, index, url = %url, "Created new tab");

        id
    }

    fn push_slot(&mut self, slot: TabSlot<E::Session>) -> usize {
        self.slots.push(slot);
        let index = self.slots.len() - 1;
        self.active = Some(index);
        index
    }

    /// Tear down every remaining session and terminate the window
    fn shutdown(&mut self) {
        for slot in self.slots.drain(..) {
            slot.close();
        }
        self.active = None;
        self.state = RegistryState::Terminated;

        tracing::info!("Last tab closed, window terminated");
    }

    fn ensure_running(&self) -> Result<()> {
        if self.state.is_running() {
            Ok(())
        } else {
            Err(TabError::Terminated)
        }
    }
}

impl<E: Engine> Drop for TabRegistry<E> {
    fn drop(&mut self) {
        for slot in self.slots.drain(..) {
            slot.close();
        }
    }
}

impl<E: Engine> std::fmt::Debug for TabRegistry<E>
where
    E::Session: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabRegistry")
            .field("slots", &self.slots)
            .field("active", &self.active)
            .field("state", &self.state)
            .finish()
    }
}
