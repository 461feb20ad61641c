//! Syntactic scheme/authority split.
//!
//! No validation happens here and nothing fails: whatever sits between `//`
//! and the first `/`, `?` or `#` is taken as the network location.

/// Scheme and network location of a URL string; path, query and fragment are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Lowercased scheme, empty when none was found.
    pub scheme: String,
    /// Authority exactly as written (userinfo, host, port), possibly empty.
    pub netloc: String,
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.'
}

/// Splits `url` into scheme and network location.
///
/// ASCII tab, CR and LF are removed first. The scheme must start with an
/// ASCII letter; without a scheme or without `//` the netloc is empty.
pub fn split_url(url: &str) -> UrlParts {
    let cleaned: String = url.chars().filter(|c| !matches!(c, '\t' | '\r' | '\n')).collect();
    let mut rest = cleaned.as_str();

    let mut scheme = String::new();
    if let Some(colon) = rest.find(':') {
        let candidate = &rest[..colon];
        let starts_alpha = candidate
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        if starts_alpha && candidate.chars().all(is_scheme_char) {
            scheme = candidate.to_ascii_lowercase();
            rest = &rest[colon + 1..];
        }
    }

    let netloc = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            after[..end].to_string()
        }
        None => String::new(),
    };

    UrlParts { scheme, netloc }
}
