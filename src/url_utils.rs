//! URL Utility Functions
//!
//! Resolution of relative profile, company and image links against the page
//! origin, and the normalization used as the engagement dedup key.

use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Resolve an `href`/`src` value to an absolute http(s) URL.
///
/// Already-absolute values are returned as parsed; relative values are joined
/// onto `base`. Scheme-only links (`javascript:`, `mailto:`, `tel:`, `data:`)
/// and fragment-only links never resolve.
///
/// # Returns
/// * `Some(absolute_url)` on success, `None` when no absolute URL can be formed
#[must_use]
pub fn resolve_url(href: &str, base: Option<&Url>) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    if let (true, Some(url)) = is_absolute_url(href) {
        return Some(url.to_string());
    }

    let joined = base?.join(href).ok()?;
    match joined.scheme() {
        "http" | "https" if joined.host().is_some() => Some(joined.to_string()),
        _ => None,
    }
}

/// Resolve a link when possible, otherwise keep the trimmed raw value.
///
/// Used for fields such as company URLs where a relative path is still more
/// useful to the caller than nothing.
#[must_use]
pub fn resolve_or_keep(href: &str, base: Option<&Url>) -> Option<String> {
    let trimmed = href.trim();
    if trimmed.is_empty() {
        return None;
    }
    resolve_url(trimmed, base).or_else(|| Some(trimmed.to_string()))
}

/// Normalize an absolute profile URL into its dedup key.
///
/// Query string and fragment are dropped (tracking parameters differ between
/// the name link and the "view profile" link of one row) and a trailing
/// slash is removed unless the path is the root.
#[must_use]
pub fn normalize_profile_url(url_str: &str) -> String {
    let Some(mut url) = parse_url(url_str) else {
        return url_str.trim().to_string();
    };

    url.set_query(None);
    url.set_fragment(None);

    let path = url.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        url.set_path(path.trim_end_matches('/'));
    }

    url.to_string()
}

/// Parse a URL string into a Url object.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    match is_absolute_url(url_str) {
        (true, parsed) => parsed,
        _ => None,
    }
}
