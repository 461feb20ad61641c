//! Registrable ("root") domain extraction without a public suffix list.
//!
//! Hosts with a short two-letter or company-style second level
//! (`co.uk`, `ltd.in`) keep three labels; everything else keeps two.

use crate::domain_filter::bare_domain;
use crate::host_check::validate_label;

const MAX_LABELS: usize = 6;
const MAX_TLD_LEN: usize = 10;
const COMPANY_SECOND_LEVELS: [&str; 5] = ["ltd", "inc", "llc", "pvt", "pty"];

fn plausible_tld(tld: &str) -> bool {
    let letters = tld.chars().filter(|c| c.is_ascii_lowercase()).count();
    tld.len() >= 2
        && tld.len() <= MAX_TLD_LEN
        && letters * 2 >= tld.len()
        && !tld.chars().all(|c| c.is_ascii_digit())
}

fn suspicious(domain: &str, labels: &[&str]) -> bool {
    labels.len() > MAX_LABELS
        || domain.contains("--")
        || domain.contains(".-")
        || domain.contains("-.")
}

fn two_letter(label: &str) -> bool {
    label.len() == 2 && label.chars().all(|c| c.is_ascii_lowercase())
}

/// Returns the root domain of a host or netloc, or `None` when it does not
/// look like a public DNS name.
///
/// # Examples
///
/// - `root_domain("api.github.com")` → `Some("github.com")`
/// - `root_domain("www.bbc.co.uk:443")` → `Some("bbc.co.uk")`
/// - `root_domain("192.168.0.1")` → `None`
pub fn root_domain(netloc: &str) -> Option<String> {
    let domain = bare_domain(netloc);
    if domain.is_empty() || domain.len() > 253 {
        return None;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| validate_label(l).is_err()) {
        return None;
    }
    let tld = labels[labels.len() - 1];
    if !plausible_tld(tld) || suspicious(&domain, &labels) {
        return None;
    }
    if labels.len() == 2 {
        return Some(domain);
    }

    let second = labels[labels.len() - 2];
    let keep = if two_letter(second) || COMPANY_SECOND_LEVELS.contains(&second) {
        3
    } else {
        2
    };
    Some(labels[labels.len() - keep..].join("."))
}
