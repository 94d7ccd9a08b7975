//! NameSilo reply decoding
//!
//! Turns a [`RawResponse`] into records or an acknowledgement. A reply only
//! counts as success when the HTTP status is 200, the body is well-formed XML
//! and the reply code equals [`SUCCESS_CODE`].

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::common::relative_host;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::{RawResponse, Record};
use crate::utils::log_sanitizer::truncate_for_log;

use super::SUCCESS_CODE;
use super::types::{AckReply, ListRecordsReply, NamesiloEnvelope};

/// Decoder for NameSilo XML replies.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ReplyDecoder;

impl ReplyDecoder {
    /// Decode a `dnsListRecords` reply; names are made relative to `zone`.
    pub fn records(&self, raw: &RawResponse, zone: &str, ctx: ErrorContext) -> Result<Vec<Record>> {
        self.check_status(raw, &ctx)?;

        let envelope: NamesiloEnvelope<ListRecordsReply> =
            HttpUtils::parse_xml(&raw.body, self.provider_name(), &ctx)?;
        let reply = envelope.reply;

        if reply.code != SUCCESS_CODE {
            return Err(self.map_error(RawApiError::new(reply.code, reply.detail), ctx));
        }

        Ok(reply
            .resource_records
            .into_iter()
            .map(|r| Record {
                id: r.record_id,
                record_type: r.record_type,
                name: relative_host(zone, &r.host),
                value: r.value,
                ttl: r.ttl,
                priority: r.distance,
            })
            .collect())
    }

    /// Decode an acknowledgement; returns the `record_id` the registrar echoed, if any.
    pub fn acknowledge(&self, raw: &RawResponse, ctx: ErrorContext) -> Result<Option<String>> {
        self.check_status(raw, &ctx)?;

        let envelope: NamesiloEnvelope<AckReply> =
            HttpUtils::parse_xml(&raw.body, self.provider_name(), &ctx)?;
        let reply = envelope.reply;

        if reply.code != SUCCESS_CODE {
            return Err(self.map_error(RawApiError::new(reply.code, reply.detail), ctx));
        }

        Ok(reply.record_id.filter(|id| !id.is_empty()))
    }

    fn check_status(&self, raw: &RawResponse, ctx: &ErrorContext) -> Result<()> {
        if raw.is_ok() {
            return Ok(());
        }
        Err(ProviderError::HttpStatus {
            provider: self.provider_name().to_string(),
            operation: ctx.operation.clone(),
            domain: ctx.domain.clone(),
            status: raw.status,
            body: truncate_for_log(&raw.body),
        })
    }
}
