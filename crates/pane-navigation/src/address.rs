//! Address bar input normalization
//!
//! Input is not validated here. Anything malformed is handed to the engine,
//! which shows its own load-failure page.

/// Scheme prefixed onto input that has none
pub const DEFAULT_SCHEME: &str = "http";

/// Schemes passed through to the engine untouched
pub const RECOGNIZED_SCHEMES: &[&str] = &["http", "https", "file", "about", "data"];

/// Turn raw address bar text into a navigable URL.
///
/// Returns `None` for blank input.
pub fn normalize_address(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if has_recognized_scheme(input) {
        Some(input.to_string())
    } else {
        Some(format!("{}://{}", DEFAULT_SCHEME, input))
    }
}

/// Check whether `input` starts with one of [`RECOGNIZED_SCHEMES`] followed by `:`
pub fn has_recognized_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once(':') else {
        return false;
    };

    // RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    let well_formed = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    well_formed
        && RECOGNIZED_SCHEMES
            .iter()
            .any(|known| scheme.eq_ignore_ascii_case(known))
}
