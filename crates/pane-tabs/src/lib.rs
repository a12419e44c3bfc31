//! Pane Tab Registry
//!
//! Owns the ordered set of tabs in a window, the active index, and the
//! running/terminated lifecycle of the window itself.
//! Every tab owns exactly one rendering engine session.

mod engine;
mod error;
mod registry;
mod state;
mod tab;

pub use engine::{Engine, EngineSession};
pub use error::TabError;
pub use registry::{CloseOutcome, TabRegistry};
pub use state::RegistryState;
pub use tab::{Tab, TabId, TabSlot, TabSummary, DEFAULT_ZOOM};

pub type Result<T> = std::result::Result<T, TabError>;
