use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all record operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Failure classes
///
/// - transport: [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout)
/// - HTTP: [`HttpStatus`](Self::HttpStatus) for any non-200 response
/// - decode: [`ParseError`](Self::ParseError) when a reply body is not the expected XML
/// - registrar: [`Registrar`](Self::Registrar) and its mapped refinements
///   ([`InvalidCredentials`](Self::InvalidCredentials),
///   [`PermissionDenied`](Self::PermissionDenied),
///   [`DomainNotFound`](Self::DomainNotFound),
///   [`InvalidParameter`](Self::InvalidParameter)) when the reply code is not success
///
/// None of these are retried. Records processed before the failing call stay applied.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("[{provider}] Network error: {detail}")]
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("[{provider}] Request timeout: {detail}")]
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The registrar answered with an HTTP status other than 200.
    #[error("[{provider}] HTTP {status} during {operation} on '{domain}': {body}")]
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// Operation being attempted (e.g. `dnsAddRecord`).
        operation: String,
        /// Registrar domain the call targeted.
        domain: String,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for display.
        body: String,
    },

    /// The provided API key is invalid or missing.
    #[error("[{provider}] Invalid credentials: {raw_message}")]
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Reply code, absent when the key was rejected before any call.
        #[serde(default)]
        reply_code: Option<u32>,
        /// Original detail text from the registrar.
        raw_message: String,
    },

    /// The API key is not allowed to perform the request.
    #[error("[{provider}] Permission denied during {operation}: reply code {reply_code}: {raw_message}")]
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Operation being attempted.
        operation: String,
        /// Reply code returned by the registrar.
        reply_code: u32,
        /// Original detail text from the registrar.
        raw_message: String,
    },

    /// The domain is not active or does not belong to the account.
    #[error(
        "[{provider}] Domain '{domain}' not found during {operation} for '{host}': reply code {reply_code}: {raw_message}"
    )]
    DomainNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Operation being attempted.
        operation: String,
        /// Domain name that was not found.
        domain: String,
        /// Zone-relative hostname of the record involved, empty for zone-wide calls.
        host: String,
        /// Reply code returned by the registrar.
        reply_code: u32,
        /// Original detail text from the registrar.
        raw_message: String,
    },

    /// A request parameter was rejected.
    #[error("[{provider}] Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Reply code, absent when the request was refused before sending.
        #[serde(default)]
        reply_code: Option<u32>,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to decode the registrar's reply.
    #[error("[{provider}] Parse error during {operation} for '{host}' in '{domain}': {detail}")]
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Operation whose reply could not be decoded.
        operation: String,
        /// Registrar domain the call targeted.
        domain: String,
        /// Zone-relative hostname of the record involved, empty for zone-wide calls.
        host: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The reply decoded fine but its code signals failure.
    #[error(
        "[{provider}] {operation} failed for '{host}' in '{domain}': reply code {reply_code}: {detail}"
    )]
    Registrar {
        /// Provider that produced the error.
        provider: String,
        /// Operation being attempted (e.g. `dnsUpdateRecord`).
        operation: String,
        /// Registrar domain the call targeted.
        domain: String,
        /// Zone-relative hostname of the record involved, empty for zone-wide calls.
        host: String,
        /// Reply code returned by the registrar.
        reply_code: u32,
        /// Human-readable detail returned by the registrar.
        detail: String,
    },
}

impl ProviderError {
    /// Whether the error is an expected outcome (bad input, missing resource),
    /// used to pick the log level.
    ///
    /// `true` logs at `warn`, `false` at `error`.
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::DomainNotFound { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Registrar reply code carried by this error, if the registrar answered at all.
    #[must_use]
    pub fn reply_code(&self) -> Option<u32> {
        match self {
            Self::Registrar { reply_code, .. }
            | Self::PermissionDenied { reply_code, .. }
            | Self::DomainNotFound { reply_code, .. } => Some(*reply_code),
            Self::InvalidCredentials { reply_code, .. }
            | Self::InvalidParameter { reply_code, .. } => *reply_code,
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
