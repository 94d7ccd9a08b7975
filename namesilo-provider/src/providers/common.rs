//! Helpers shared by the registrar client and the reconciler.

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default whole-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build the HTTP client with the given timeouts.
pub fn create_http_client(
    provider: &str,
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<Client> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ Name handling ============

/// Registrar `domain` parameter for a zone: the zone without its trailing dot.
/// e.g. "example.com." -> "example.com"
pub fn zone_domain(zone: &str) -> String {
    zone.trim_end_matches('.').to_string()
}

/// Hostname relative to `zone`.
/// e.g. "www.example.com" + "example.com" -> "www"
/// e.g. "_acme.example.com." + "example.com." -> "_acme"
/// e.g. "example.com" + "example.com" -> ""
/// Names that are already relative come back unchanged, minus a trailing dot.
pub fn relative_host(zone: &str, name: &str) -> String {
    let zone = zone.trim_end_matches('.');
    let name = name.trim_end_matches('.');

    if zone.is_empty() {
        return name.to_string();
    }
    if name.eq_ignore_ascii_case(zone) {
        return String::new();
    }

    let split = name.len().checked_sub(zone.len() + 1);
    match split {
        Some(at)
            if name.is_char_boundary(at)
                && name[at..].starts_with('.')
                && name[at + 1..].eq_ignore_ascii_case(zone) =>
        {
            name[..at].to_string()
        }
        _ => name.to_string(),
    }
}

/// Whether two names denote the same host within `zone` (case-insensitive).
pub fn same_host(zone: &str, a: &str, b: &str) -> bool {
    relative_host(zone, a).eq_ignore_ascii_case(&relative_host(zone, b))
}

/// Whether two record types are equal (case-insensitive).
pub fn same_type(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
