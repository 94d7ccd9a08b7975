//! Provider factory functions and configuration.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::providers::NamesiloClient;
use crate::providers::common::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::reconciler::RecordReconciler;
use crate::traits::DnsRecordProvider;

/// Settings needed to reach the registrar.
///
/// Deserializes from camelCase JSON (`apiKey`, `apiBase`, `timeoutSecs`).
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Endpoint override; the public API when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"***")
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Creates a [`DnsRecordProvider`] from the given configuration.
///
/// The returned provider is wrapped in `Arc<dyn DnsRecordProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use namesilo_provider::{create_provider, ProviderConfig};
///
/// let provider = create_provider(&ProviderConfig::new("your-api-key")).unwrap();
/// ```
pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn DnsRecordProvider>> {
    if config.api_key.trim().is_empty() {
        return Err(ProviderError::InvalidCredentials {
            provider: "namesilo".to_string(),
            reply_code: None,
            raw_message: "API key is empty".to_string(),
        });
    }

    let mut builder = NamesiloClient::builder(config.api_key.clone())
        .connect_timeout(Duration::from_secs(
            DEFAULT_CONNECT_TIMEOUT_SECS.min(config.timeout_secs.max(1)),
        ))
        .request_timeout(Duration::from_secs(config.timeout_secs.max(1)));
    if let Some(api_base) = &config.api_base {
        builder = builder.api_base(api_base.clone());
    }

    Ok(Arc::new(RecordReconciler::new(builder.build()?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_json_uses_defaults() {
        let config: ProviderConfig = serde_json::from_str(r#"{"apiKey":"abc"}"#).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.api_base, None);
        assert_eq!(config.timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn debug_hides_api_key() {
        let text = format!("{:?}", ProviderConfig::new("super-secret"));
        assert!(!text.contains("super-secret"));
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let result = create_provider(&ProviderConfig::new("  "));
        assert!(matches!(result, Err(ProviderError::InvalidCredentials { .. })));
    }

    #[test]
    fn provider_reports_registrar_id() {
        let provider = create_provider(&ProviderConfig::new("key")).unwrap();
        assert_eq!(provider.id(), "namesilo");
    }
}
