//! Normalize, optionally validate and filter, then deduplicate a list of raw URLs.

use crate::dedup::{dedup_by, DedupKey};
use crate::domain_filter::DomainFilter;
use crate::host_check::validate_host;
use crate::normalize::{normalize_url, CanonicalUrl, PrefixMode};
use serde::Serialize;

/// Knobs for a single cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOptions {
    pub prefix_mode: PrefixMode,
    /// Drop entries whose host fails [`validate_host`] instead of keeping them.
    pub strict_hosts: bool,
    pub filter: DomainFilter,
    pub dedup_key: DedupKey,
}

/// Counters for a cleaning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    /// Raw URLs handed in.
    pub input: usize,
    /// Entries dropped by strict host validation.
    pub rejected: usize,
    /// Entries dropped by the include/exclude domain lists.
    pub filtered: usize,
    /// Entries dropped because their host was already present.
    pub duplicates: usize,
    /// Entries written out.
    pub unique: usize,
}

/// Result of [`clean_urls`].
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    pub urls: Vec<CanonicalUrl>,
    pub stats: CleanStats,
}

/// Reduces raw URLs to one canonical `scheme://netloc` per distinct key
/// (host by default), in order of first appearance.
///
/// Callers are expected to have skipped blank lines already.
pub fn clean_urls<I, S>(raw: I, opts: &CleanOptions) -> CleanReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stats = CleanStats::default();
    let mut normalized = Vec::new();

    for url in raw {
        stats.input += 1;
        let canonical = normalize_url(url.as_ref(), opts.prefix_mode);
        if opts.strict_hosts {
            if let Err(err) = validate_host(canonical.host_key()) {
                tracing::warn!(url = url.as_ref(), %err, "rejected URL");
                stats.rejected += 1;
                continue;
            }
        }
        if !opts.filter.allows(canonical.host_key()) {
            tracing::debug!(url = url.as_ref(), "dropped by domain filter");
            stats.filtered += 1;
            continue;
        }
        normalized.push(canonical);
    }

    let kept = normalized.len();
    let urls = dedup_by(normalized, opts.dedup_key);
    stats.unique = urls.len();
    stats.duplicates = kept - stats.unique;

    tracing::debug!(
        input = stats.input,
        rejected = stats.rejected,
        filtered = stats.filtered,
        duplicates = stats.duplicates,
        unique = stats.unique,
        "cleaned URL list"
    );

    CleanReport { urls, stats }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(raw: &[&str]) -> Vec<String> {
        clean_urls(raw, &CleanOptions::default())
            .urls
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn bare_domain() {
        assert_eq!(clean(&["example.com"]), ["http://www.example.com"]);
    }

    #[test]
    fn same_host_different_scheme_and_path_collapse() {
        assert_eq!(
            clean(&["http://example.com/page?x=1", "https://example.com/other"]),
            ["http://example.com"]
        );
    }

    #[test]
    fn www_and_bare_hosts_stay_distinct() {
        assert_eq!(
            clean(&["https://www.foo.com", "http://foo.com"]),
            ["http://www.foo.com", "http://foo.com"]
        );
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let report = clean_urls(Vec::<String>::new(), &CleanOptions::default());
        assert!(report.urls.is_empty());
        assert_eq!(report.stats, CleanStats::default());
    }

    #[test]
    fn malformed_entry_yields_single_output() {
        assert_eq!(clean(&["not a url!!"]).len(), 1);
        assert_eq!(clean(&["not a url!!", "not a url!!"]).len(), 1);
    }

    #[test]
    fn hostless_entries_merge_into_one() {
        assert_eq!(clean(&["http:///a", "https:///b"]), ["http://"]);
    }

    #[test]
    fn output_has_unique_hosts_in_first_seen_order() {
        let raw = [
            "b.org/x",
            "https://a.org",
            "http://www.b.org/y",
            "a.org",
            "http://a.org/z",
        ];
        let report = clean_urls(raw, &CleanOptions::default());
        let hosts: Vec<&str> = report.urls.iter().map(|u| u.host_key()).collect();
        assert_eq!(hosts, ["www.b.org", "a.org", "www.a.org"]);
        assert_eq!(
            report.stats,
            CleanStats {
                input: 5,
                rejected: 0,
                filtered: 0,
                duplicates: 2,
                unique: 3
            }
        );
    }

    #[test]
    fn cleaning_output_again_is_stable() {
        let first = clean(&["example.com/a", "https://x.io/b?c", "not a url!!"]);
        let refs: Vec<&str> = first.iter().map(String::as_str).collect();
        assert_eq!(clean(&refs), first);
    }

    #[test]
    fn strict_mode_drops_invalid_hosts() {
        let opts = CleanOptions {
            strict_hosts: true,
            ..CleanOptions::default()
        };
        let report = clean_urls(["not a url!!", "http:///x", "example.com"], &opts);
        let urls: Vec<String> = report.urls.iter().map(ToString::to_string).collect();
        assert_eq!(urls, ["http://www.example.com"]);
        assert_eq!(report.stats.rejected, 2);
        assert_eq!(report.stats.unique, 1);
    }

    #[test]
    fn legacy_mode_prefixes_www_everywhere() {
        let opts = CleanOptions {
            prefix_mode: PrefixMode::Legacy,
            ..CleanOptions::default()
        };
        let report = clean_urls(["http://example.com/page", "example.com"], &opts);
        let urls: Vec<String> = report.urls.iter().map(ToString::to_string).collect();
        assert_eq!(urls, ["http://www.example.com"]);
        assert_eq!(report.stats.duplicates, 1);
    }

    #[test]
    fn include_and_exclude_lists_filter_before_dedup() {
        let opts = CleanOptions {
            filter: DomainFilter::new(["example.com"], ["ads.example.com"]),
            ..CleanOptions::default()
        };
        let report = clean_urls(
            [
                "https://shop.example.com/cart",
                "other.org",
                "http://ads.example.com/pixel",
                "example.com",
                "https://shop.example.com/again",
            ],
            &opts,
        );
        let urls: Vec<String> = report.urls.iter().map(ToString::to_string).collect();
        assert_eq!(urls, ["http://shop.example.com", "http://www.example.com"]);
        assert_eq!(report.stats.filtered, 2);
        assert_eq!(report.stats.duplicates, 1);
    }

    #[test]
    fn root_domain_mode_keeps_first_host_per_root() {
        let opts = CleanOptions {
            dedup_key: DedupKey::RootDomain,
            ..CleanOptions::default()
        };
        let report = clean_urls(
            ["https://api.github.com/x", "github.com", "http://www.bbc.co.uk/news", "bbc.co.uk"],
            &opts,
        );
        let urls: Vec<String> = report.urls.iter().map(ToString::to_string).collect();
        assert_eq!(urls, ["http://api.github.com", "http://www.bbc.co.uk"]);
        assert_eq!(report.stats.duplicates, 2);
    }

    #[test]
    fn stats_serialize_to_json() {
        let stats = CleanStats {
            input: 4,
            rejected: 1,
            filtered: 1,
            duplicates: 1,
            unique: 1,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["input"], 4);
        assert_eq!(json["filtered"], 1);
        assert_eq!(json["unique"], 1);
    }
}
