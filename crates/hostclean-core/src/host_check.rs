//! Strict host validation, used when `strict_hosts` is enabled.
//!
//! Accepts DNS names with a plausible top-level label, dotted IPv4,
//! bracketed IPv6 and `localhost`. Userinfo and a numeric port are ignored.

use std::net::{Ipv4Addr, Ipv6Addr};
use thiserror::Error;

const MAX_HOST_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Reason a network location failed strict validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("empty host")]
    Empty,
    #[error("host longer than {} bytes", MAX_HOST_LEN)]
    TooLong,
    #[error("invalid port {0:?}")]
    InvalidPort(String),
    #[error("invalid IP literal {0:?}")]
    InvalidIp(String),
    #[error("host {0:?} has no top-level label")]
    MissingTld(String),
    #[error("invalid label {0:?}")]
    InvalidLabel(String),
    #[error("invalid top-level label {0:?}")]
    InvalidTld(String),
}

/// Splits `host[:port]` off a netloc, dropping any `userinfo@`.
///
/// A bracketed host must be closed, and only `:port` may follow the `]`.
pub(crate) fn split_host_port(netloc: &str) -> Result<(&str, Option<&str>), HostError> {
    let hostport = netloc.rsplit_once('@').map_or(netloc, |(_, h)| h);
    if hostport.starts_with('[') {
        let end = hostport
            .find(']')
            .ok_or_else(|| HostError::InvalidIp(hostport.to_string()))?;
        let (host, tail) = hostport.split_at(end + 1);
        return match tail.strip_prefix(':') {
            Some(port) => Ok((host, Some(port))),
            None if tail.is_empty() => Ok((host, None)),
            None => Err(HostError::InvalidIp(hostport.to_string())),
        };
    }
    Ok(match hostport.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (hostport, None),
    })
}

fn looks_like_ipv4(host: &str) -> bool {
    host.split('.').count() == 4 && host.chars().all(|c| c.is_ascii_digit() || c == '.')
}

pub(crate) fn validate_label(label: &str) -> Result<(), HostError> {
    let ok = !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-');
    if ok {
        Ok(())
    } else {
        Err(HostError::InvalidLabel(label.to_string()))
    }
}

/// Validates the host part of a network location.
pub fn validate_host(netloc: &str) -> Result<(), HostError> {
    let (host, port) = split_host_port(netloc)?;

    if let Some(port) = port {
        if port.is_empty() || port.parse::<u16>().is_err() {
            return Err(HostError::InvalidPort(port.to_string()));
        }
    }
    if host.is_empty() {
        return Err(HostError::Empty);
    }
    if host.len() > MAX_HOST_LEN {
        return Err(HostError::TooLong);
    }

    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return inner
            .parse::<Ipv6Addr>()
            .map(|_| ())
            .map_err(|_| HostError::InvalidIp(host.to_string()));
    }

    if looks_like_ipv4(host) {
        // Ipv4Addr parsing already rejects octets > 255 and leading zeros.
        return host
            .parse::<Ipv4Addr>()
            .map(|_| ())
            .map_err(|_| HostError::InvalidIp(host.to_string()));
    }

    if host.eq_ignore_ascii_case("localhost") {
        return Ok(());
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return Err(HostError::MissingTld(host.to_string()));
    }
    for label in &labels {
        validate_label(label)?;
    }

    let tld = labels[labels.len() - 1];
    if tld.len() < 2 || tld.chars().all(|c| c.is_ascii_digit()) {
        return Err(HostError::InvalidTld(tld.to_string()));
    }

    Ok(())
}
