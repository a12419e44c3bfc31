//! Tab error types

use thiserror::Error;

use crate::tab::TabId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(TabId),

    #[error("Tab index {index} out of range ({len} tabs open)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Window has already been closed")]
    Terminated,
}
