//! Base URL normalization for user-supplied Ollama addresses.

/// Normalize a user-supplied base URL.
///
/// Trims whitespace, defaults the scheme to `http://` when none is given,
/// and strips trailing slashes so paths can be appended directly.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    with_scheme.trim_end_matches('/').to_string()
}
