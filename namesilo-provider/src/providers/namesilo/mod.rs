//! NameSilo registrar

mod decode;
mod error;
mod http;
mod provider;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client,
};

pub(crate) use decode::ReplyDecoder;

pub(crate) const NAMESILO_API_BASE: &str = "https://www.namesilo.com/api";
pub(crate) const NAMESILO_API_VERSION: u32 = 1;
pub(crate) const NAMESILO_RESPONSE_TYPE: &str = "xml";
/// Reply code signalling a successful API operation
pub(crate) const SUCCESS_CODE: u32 = 300;

pub(crate) const OP_LIST_RECORDS: &str = "dnsListRecords";
pub(crate) const OP_ADD_RECORD: &str = "dnsAddRecord";
pub(crate) const OP_UPDATE_RECORD: &str = "dnsUpdateRecord";
pub(crate) const OP_DELETE_RECORD: &str = "dnsDeleteRecord";

/// NameSilo API client.
pub struct NamesiloClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) api_base: String,
}

/// Builder for [`NamesiloClient`].
pub struct NamesiloClientBuilder {
    api_key: String,
    api_base: String,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl NamesiloClientBuilder {
    fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_base: NAMESILO_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Override the API endpoint (mock servers, sandbox).
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<NamesiloClient> {
        Ok(NamesiloClient {
            client: create_http_client("namesilo", self.connect_timeout, self.request_timeout)?,
            api_key: self.api_key,
            api_base: self.api_base,
        })
    }
}

impl NamesiloClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> NamesiloClientBuilder {
        NamesiloClientBuilder::new(api_key.into())
    }
}

impl std::fmt::Debug for NamesiloClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamesiloClient")
            .field("api_base", &self.api_base)
            .field("api_key", &"***")
            .finish_non_exhaustive()
    }
}
