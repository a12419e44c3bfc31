//! Pane Downloads
//!
//! The engine performs the transfer itself. This crate covers the part the
//! shell owns: proposing a save location, pointing the request at the path
//! the user confirmed, accepting it, and recording it.

mod path;
mod record;
mod request;

pub use path::{file_name_from_url, sanitize_file_name, suggest_save_path};
pub use record::DownloadRecord;
pub use request::{accept_download, DownloadRequest};
