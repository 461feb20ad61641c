//! URL normalization down to `scheme://netloc`.
//!
//! Each raw URL goes through three steps: strip a known protocol variant,
//! reinstate a prefix, then split out scheme and network location. Path,
//! query and fragment are discarded. Nothing here touches the network or
//! fails on odd input.

mod prefix;
mod split;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use prefix::{add_http_www, remove_http_variations, CANONICAL_PREFIX, HTTP_VARIATIONS, HTTP_WWW};
pub use split::{split_url, UrlParts};

/// How a prefix is put back after [`remove_http_variations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixMode {
    /// A stripped scheme becomes `http://`; schemeless input gets `http://www.`.
    #[default]
    Canonical,
    /// Always run [`add_http_www`] on the stripped string, so
    /// `http://example.com` turns into `http://www.example.com`.
    Legacy,
}

/// A URL reduced to `scheme://netloc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalUrl {
    pub scheme: String,
    pub netloc: String,
}

impl CanonicalUrl {
    /// Dedup key: the network location exactly as parsed.
    pub fn host_key(&self) -> &str {
        &self.netloc
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.netloc)
    }
}

impl From<UrlParts> for CanonicalUrl {
    fn from(parts: UrlParts) -> Self {
        Self {
            scheme: parts.scheme,
            netloc: parts.netloc,
        }
    }
}

/// Puts a prefix back onto a raw URL according to `mode`.
///
/// # Examples
///
/// - `reprefix("example.com", Canonical)` → `"http://www.example.com"`
/// - `reprefix("https://example.com/a", Canonical)` → `"http://example.com/a"`
/// - `reprefix("https://example.com/a", Legacy)` → `"http://www.example.com/a"`
pub fn reprefix(raw: &str, mode: PrefixMode) -> String {
    let (rest, stripped) = remove_http_variations(raw);
    match (mode, stripped) {
        (PrefixMode::Canonical, Some(_)) => format!("{CANONICAL_PREFIX}{rest}"),
        _ => add_http_www(rest),
    }
}

/// Normalizes one raw URL to its canonical `scheme://netloc` form.
pub fn normalize_url(raw: &str, mode: PrefixMode) -> CanonicalUrl {
    split_url(&reprefix(raw, mode)).into()
}
