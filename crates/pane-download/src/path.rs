//! Save location suggestions

use std::path::{Path, PathBuf};

const FALLBACK_FILE_NAME: &str = "download";

/// Default path offered in the save prompt.
///
/// Uses the file name the engine proposed, then the last URL segment, then
/// a generic name, always inside `download_dir`.
pub fn suggest_save_path(download_dir: &Path, suggested: &Path, url: &str) -> PathBuf {
    let from_engine = suggested
        .file_name()
        .and_then(|name| name.to_str())
        .map(sanitize_file_name)
        .filter(|name| name != FALLBACK_FILE_NAME);

    let file_name = from_engine
        .or_else(|| file_name_from_url(url))
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

    download_dir.join(file_name)
}

/// Strip directory components and whitespace from a proposed file name
pub fn sanitize_file_name(file_name: &str) -> String {
    let name = Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(FALLBACK_FILE_NAME)
        .trim();

    if name.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Last non-empty path segment of `url`, if it parses
pub fn file_name_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(sanitize_file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("report.pdf"), "report.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("  "), "download");
        assert_eq!(sanitize_file_name(""), "download");
    }

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://example.com/files/archive.tar.gz"),
            Some("archive.tar.gz".to_string())
        );
        assert_eq!(file_name_from_url("https://example.com/"), None);
        assert_eq!(file_name_from_url("not a url"), None);
    }

    #[test]
    fn test_suggest_save_path() {
        let dir = Path::new("/home/user/Downloads");

        assert_eq!(
            suggest_save_path(dir, Path::new("/tmp/engine/file.zip"), "https://x.test/a"),
            dir.join("file.zip")
        );
        assert_eq!(
            suggest_save_path(dir, Path::new(""), "https://x.test/files/b.pdf"),
            dir.join("b.pdf")
        );
        assert_eq!(
            suggest_save_path(dir, Path::new(""), "https://x.test/"),
            dir.join("download")
        );
    }
}
