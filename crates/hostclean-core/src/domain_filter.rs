//! Include/exclude filtering by domain.
//!
//! A host matches a listed domain when it equals it or ends with `.` plus it,
//! so `example.com` also covers `api.example.com`. Comparison ignores ASCII
//! case, a leading `www.` and any userinfo or port.

use crate::host_check::split_host_port;
use serde::{Deserialize, Serialize};

/// Reduces a list entry or netloc to a bare, lowercased domain.
///
/// `https://www.Example.com/path` and `www.example.com:8080` both become
/// `example.com`.
pub fn bare_domain(entry: &str) -> String {
    let entry = entry.trim();
    let entry = entry
        .strip_prefix("http://")
        .or_else(|| entry.strip_prefix("https://"))
        .unwrap_or(entry);
    let hostport = entry.split(['/', '?', '#']).next().unwrap_or_default();
    let host = match split_host_port(hostport) {
        Ok((host, _)) => host,
        Err(_) => hostport,
    };
    let host = host.to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

/// True when `domain` equals `listed` or is a subdomain of it.
pub fn domain_matches(domain: &str, listed: &str) -> bool {
    domain == listed
        || domain
            .strip_suffix(listed)
            .is_some_and(|head| head.ends_with('.'))
}

/// Keep/drop rules applied to each cleaned URL's host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFilter {
    /// When non-empty, only hosts under one of these domains are kept.
    #[serde(default)]
    pub include: Vec<String>,
    /// Hosts under any of these domains are dropped.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl DomainFilter {
    pub fn new<I, E, S, T>(include: I, exclude: E) -> Self
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let normalize = |d: &str| Some(bare_domain(d)).filter(|d| !d.is_empty());
        Self {
            include: include.into_iter().filter_map(|d| normalize(d.as_ref())).collect(),
            exclude: exclude.into_iter().filter_map(|d| normalize(d.as_ref())).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Whether a URL with this network location survives the filter.
    ///
    /// An empty host never passes an include list but is never excluded.
    pub fn allows(&self, netloc: &str) -> bool {
        let domain = bare_domain(netloc);
        let listed = |list: &[String]| list.iter().any(|d| domain_matches(&domain, &bare_domain(d)));

        if !self.include.is_empty() && (domain.is_empty() || !listed(&self.include)) {
            return false;
        }
        domain.is_empty() || !listed(&self.exclude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domain_strips_decoration() {
        assert_eq!(bare_domain("https://www.Example.com/path?q"), "example.com");
        assert_eq!(bare_domain("user@www.example.com:8080"), "example.com");
        assert_eq!(bare_domain("  sub.example.org  "), "sub.example.org");
        assert_eq!(bare_domain(""), "");
    }

    #[test]
    fn subdomains_match_by_dot_suffix() {
        assert!(domain_matches("example.com", "example.com"));
        assert!(domain_matches("api.example.com", "example.com"));
        assert!(domain_matches("a.b.example.com", "example.com"));
        assert!(!domain_matches("badexample.com", "example.com"));
        assert!(!domain_matches("example.com.evil.net", "example.com"));
    }

    #[test]
    fn include_keeps_only_listed_domains() {
        let filter = DomainFilter::new(["example.com"], Vec::<String>::new());
        assert!(filter.allows("www.example.com"));
        assert!(filter.allows("cdn.example.com:443"));
        assert!(!filter.allows("other.org"));
        assert!(!filter.allows(""));
    }

    #[test]
    fn exclude_drops_listed_domains() {
        let filter = DomainFilter::new(Vec::<String>::new(), ["https://www.ads.net/"]);
        assert_eq!(filter.exclude, ["ads.net"]);
        assert!(!filter.allows("tracker.ads.net"));
        assert!(!filter.allows("ADS.net"));
        assert!(filter.allows("example.com"));
        assert!(filter.allows(""));
    }

    #[test]
    fn exclude_wins_over_include() {
        let filter = DomainFilter::new(["example.com"], ["internal.example.com"]);
        assert!(filter.allows("www.example.com"));
        assert!(!filter.allows("db.internal.example.com"));
    }

    #[test]
    fn blank_entries_are_ignored() {
        let filter = DomainFilter::new(["", "  "], ["www."]);
        assert!(filter.is_empty());
        assert!(filter.allows("anything.io"));
    }
}
