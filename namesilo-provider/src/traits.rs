use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    CreateRecordRequest, DeleteRecordRequest, RawResponse, Record, UpdateRecordRequest,
};

/// Raw registrar failure before mapping (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Registrar reply code.
    pub code: u32,
    /// Detail text as returned.
    pub detail: String,
}

impl RawApiError {
    pub fn new(code: u32, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }
}

/// Call context attached to mapped errors (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Operation name, e.g. `dnsAddRecord`.
    pub operation: String,
    /// Registrar `domain` parameter.
    pub domain: String,
    /// Zone-relative hostname, empty for zone-wide calls.
    pub host: String,
}

impl ErrorContext {
    pub fn new(operation: &str, domain: &str, host: &str) -> Self {
        Self {
            operation: operation.to_string(),
            domain: domain.to_string(),
            host: host.to_string(),
        }
    }
}

/// Maps registrar reply codes onto [`ProviderError`] (internal).
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier used in errors.
    fn provider_name(&self) -> &'static str;

    /// Map a raw failure to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Fallback for reply codes without a dedicated variant.
    fn registrar_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        ProviderError::Registrar {
            provider: self.provider_name().to_string(),
            operation: context.operation,
            domain: context.domain,
            host: context.host,
            reply_code: raw.code,
            detail: raw.detail,
        }
    }
}

/// Registrar transport: one network call per method, no decoding.
///
/// Implementations return the HTTP status and body as-is; transport failures
/// (connection, timeout) are the only errors they produce.
#[async_trait]
pub trait RegistrarClient: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Fetch every record of a domain.
    async fn list_records(&self, domain: &str) -> Result<RawResponse>;

    /// Create one record.
    async fn create_record(&self, req: &CreateRecordRequest) -> Result<RawResponse>;

    /// Update one record.
    async fn update_record(&self, req: &UpdateRecordRequest) -> Result<RawResponse>;

    /// Delete one record.
    async fn delete_record(&self, req: &DeleteRecordRequest) -> Result<RawResponse>;
}

/// DNS record provider contract: list, append, set and delete records of a zone.
///
/// Every mutating call processes records one at a time and stops at the first
/// failure. Nothing already applied is rolled back.
#[async_trait]
pub trait DnsRecordProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// List all records of the zone, names relative to the zone.
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// Create every record; returns the input records that were created.
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Update matching records and create the rest; returns applied records.
    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Delete matching records; returns the registrar records that were deleted.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;
}
