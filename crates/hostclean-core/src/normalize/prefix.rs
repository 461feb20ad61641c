//! Scheme prefix handling: stripping known protocol variants and reinstating
//! a canonical prefix.

/// Known protocol variants, scanned in order; first match wins.
///
/// The `www.` forms never match on their own since the bare scheme entries
/// come first.
pub const HTTP_VARIATIONS: [&str; 4] = ["http://", "https://", "http://www.", "https://www."];

/// Prefix added to inputs that carry no scheme.
pub const HTTP_WWW: &str = "http://www.";

/// Scheme used for every canonical URL built from a stripped scheme prefix.
pub const CANONICAL_PREFIX: &str = "http://";

/// Strips the first matching entry of [`HTTP_VARIATIONS`] from `url`.
///
/// Returns the remainder and the prefix that was removed, if any.
pub fn remove_http_variations(url: &str) -> (&str, Option<&'static str>) {
    for variation in HTTP_VARIATIONS {
        if let Some(rest) = url.strip_prefix(variation) {
            return (rest, Some(variation));
        }
    }
    (url, None)
}

/// Prepends `http://www.` unless `url` already starts with `http://` or `https://`.
pub fn add_http_www(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{HTTP_WWW}{url}")
    }
}
