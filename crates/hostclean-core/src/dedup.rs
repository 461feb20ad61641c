//! Deduplication of canonical URLs by network location or root domain.

use crate::normalize::CanonicalUrl;
use crate::root_domain::root_domain;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What two canonical URLs must share to count as duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupKey {
    /// The network location exactly as parsed.
    #[default]
    Netloc,
    /// The root domain (`api.example.com` and `example.com` collide).
    /// Hosts without one fall back to their netloc.
    RootDomain,
}

impl DedupKey {
    pub fn key_for(self, url: &CanonicalUrl) -> String {
        match self {
            DedupKey::Netloc => url.netloc.clone(),
            DedupKey::RootDomain => root_domain(&url.netloc).unwrap_or_else(|| url.netloc.clone()),
        }
    }
}

/// Keeps the first canonical URL seen for each key.
///
/// Output order is the order in which each distinct key first appears.
/// An empty netloc is a key like any other.
pub fn dedup_by<I>(urls: I, key: DedupKey) -> Vec<CanonicalUrl>
where
    I: IntoIterator<Item = CanonicalUrl>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();
    for url in urls {
        if seen.insert(key.key_for(&url)) {
            unique.push(url);
        } else {
            tracing::trace!(netloc = %url.netloc, ?key, "duplicate skipped");
        }
    }
    unique
}

/// Keeps the first canonical URL seen for each network location.
pub fn dedup_by_host<I>(urls: I) -> Vec<CanonicalUrl>
where
    I: IntoIterator<Item = CanonicalUrl>,
{
    dedup_by(urls, DedupKey::Netloc)
}
