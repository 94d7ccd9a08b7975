//! Shared HTTP plumbing for registrar calls.
//!
//! Sends an already-built request, logs it with secrets redacted, and hands the
//! status code and body back to the caller. Status interpretation and reply
//! decoding stay with the caller, which knows the operation context.
//!
//! Requests are never retried: a failed call is reported immediately.

use reqwest::{Client, Request};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::traits::ErrorContext;
use crate::utils::log_sanitizer::{redact_url, truncate_for_log};

/// Request execution and reply parsing helpers.
pub struct HttpUtils;

impl HttpUtils {
    /// Sends `request` and returns the status code and body text.
    ///
    /// # Arguments
    /// * `client` - shared client carrying timeouts
    /// * `request` - fully built request (URL, query, headers)
    /// * `provider_name` - provider name, used in logs and errors
    /// * `operation` - API operation name, used in logs
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any HTTP status
    /// * `Err(ProviderError::Timeout)` - the request timed out
    /// * `Err(ProviderError::NetworkError)` - any other transport failure
    pub async fn execute_request(
        client: &Client,
        request: Request,
        provider_name: &str,
        operation: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!(
            "[{provider_name}] {} {operation} {}",
            request.method(),
            redact_url(request.url())
        );

        let response = client
            .execute(request)
            .await
            .map_err(|e| transport_error(provider_name, &e))?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {}", e.without_url()),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Deserializes an XML reply body.
    ///
    /// A failure becomes [`ProviderError::ParseError`] carrying the operation,
    /// domain and host from `context`.
    pub(crate) fn parse_xml<T>(
        response_text: &str,
        provider_name: &str,
        context: &ErrorContext,
    ) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        quick_xml::de::from_str(response_text).map_err(|e| {
            log::error!(
                "[{provider_name}] XML parse failed for {}: {e}",
                context.operation
            );
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                operation: context.operation.clone(),
                domain: context.domain.clone(),
                host: context.host.clone(),
                detail: e.to_string(),
            }
        })
    }
}

/// Map a reqwest transport failure, stripping the URL (it carries the API key).
fn transport_error(provider_name: &str, e: &reqwest::Error) -> ProviderError {
    let is_timeout = e.is_timeout();
    let detail = match e.url() {
        Some(url) => e
            .to_string()
            .replace(url.as_str(), &redact_url(url).to_string()),
        None => e.to_string(),
    };
    if is_timeout {
        ProviderError::Timeout {
            provider: provider_name.to_string(),
            detail,
        }
    } else {
        ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail,
        }
    }
}
