//! NameSilo request execution

use serde::Serialize;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::types::RawResponse;

use super::types::CommonParams;
use super::{NAMESILO_API_VERSION, NAMESILO_RESPONSE_TYPE, NamesiloClient};

impl NamesiloClient {
    /// Issue one API call.
    ///
    /// The API key travels as a GET query parameter; NameSilo rejects it elsewhere.
    pub(crate) async fn request<P: Serialize + ?Sized>(
        &self,
        operation: &str,
        params: &P,
    ) -> Result<RawResponse> {
        let url = format!("{}/{operation}", self.api_base);
        let common = CommonParams {
            version: NAMESILO_API_VERSION,
            response_type: NAMESILO_RESPONSE_TYPE,
            key: &self.api_key,
        };

        let request = self
            .client
            .get(&url)
            .query(&common)
            .query(params)
            .build()
            .map_err(|e| ProviderError::InvalidParameter {
                provider: "namesilo".to_string(),
                param: "query".to_string(),
                reply_code: None,
                detail: e.without_url().to_string(),
            })?;

        let (status, body) =
            HttpUtils::execute_request(&self.client, request, "namesilo", operation).await?;

        Ok(RawResponse::new(status, body))
    }
}
