//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    #[error("Invalid zoom policy: {0}")]
    InvalidZoomPolicy(String),
}
