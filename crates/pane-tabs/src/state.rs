//! Window lifecycle
//!
//! ```text
//! Running (>= 1 tab, exactly one active)
//!   ↓ last tab closed
//! Terminated
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryState {
    /// At least one tab is open and one of them is active
    Running,
    /// The last tab was closed; the window is gone
    Terminated,
}

impl RegistryState {
    pub fn is_running(&self) -> bool {
        matches!(self, RegistryState::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryState::Running => "running",
            RegistryState::Terminated => "terminated",
        }
    }
}

impl std::fmt::Display for RegistryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
