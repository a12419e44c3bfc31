//! Engine download requests

use std::path::{Path, PathBuf};

use crate::record::DownloadRecord;

/// A download the engine is holding until the shell decides on it.
///
/// Dropping a request without calling [`DownloadRequest::accept`] leaves it
/// to the engine's default, which is normally to cancel.
pub trait DownloadRequest {
    /// URL the download was requested from
    fn url(&self) -> String;

    /// Destination the engine proposes
    fn suggested_path(&self) -> PathBuf;

    fn set_path(&mut self, path: &Path);

    fn accept(&mut self);
}

/// Point `request` at the confirmed `path`, accept it, and build its record
pub fn accept_download<R>(request: &mut R, path: PathBuf) -> DownloadRecord
where
    R: DownloadRequest + ?Sized,
{
    request.set_path(&path);
    request.accept();

    let record = DownloadRecord::new(path, request.url());
    tracing::info!(
        url = %record.url,
        path = %record.path.display(),
        "Accepted download"
    );

    record
}
