//! Pane Navigation
//!
//! Pure pieces of the navigation bridge:
//! - Address bar normalization (scheme-less input gets `http://`)
//! - Zoom policy (step, bounds, rounding)
//! - The set of navigation intents the toolbar and menus can raise

mod address;
mod error;
mod intent;
mod zoom;

pub use address::{has_recognized_scheme, normalize_address, DEFAULT_SCHEME, RECOGNIZED_SCHEMES};
pub use error::NavigationError;
pub use intent::NavigationIntent;
pub use zoom::ZoomPolicy;

pub type Result<T> = std::result::Result<T, NavigationError>;
