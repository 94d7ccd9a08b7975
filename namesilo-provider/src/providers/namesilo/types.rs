//! NameSilo query parameters and XML reply shapes

use serde::{Deserialize, Serialize};

// ============ Request query parameters ============

/// Parameters every NameSilo API call carries.
#[derive(Debug, Serialize)]
pub struct CommonParams<'a> {
    pub version: u32,
    #[serde(rename = "type")]
    pub response_type: &'a str,
    pub key: &'a str,
}

/// `dnsListRecords` parameters.
#[derive(Debug, Serialize)]
pub struct ListRecordsParams<'a> {
    pub domain: &'a str,
}

/// `dnsAddRecord` parameters.
#[derive(Debug, Serialize)]
pub struct AddRecordParams<'a> {
    pub domain: &'a str,
    pub rrtype: &'a str,
    pub rrhost: &'a str,
    pub rrvalue: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrdistance: Option<u32>,
}

/// `dnsUpdateRecord` parameters.
#[derive(Debug, Serialize)]
pub struct UpdateRecordParams<'a> {
    pub domain: &'a str,
    pub rrid: &'a str,
    pub rrhost: &'a str,
    pub rrvalue: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrdistance: Option<u32>,
}

/// `dnsDeleteRecord` parameters.
#[derive(Debug, Serialize)]
pub struct DeleteRecordParams<'a> {
    pub domain: &'a str,
    pub rrid: &'a str,
}

// ============ XML reply structure ============

/// Root `<namesilo>` element. The `<request>` echo is ignored.
#[derive(Debug, Deserialize)]
pub struct NamesiloEnvelope<R> {
    pub reply: R,
}

/// `<reply>` of `dnsListRecords`.
#[derive(Debug, Deserialize)]
pub struct ListRecordsReply {
    pub code: u32,
    #[serde(default)]
    pub detail: String,
    #[serde(rename = "resource_record", default)]
    pub resource_records: Vec<NamesiloRecord>,
}

/// One `<resource_record>` entry.
#[derive(Debug, Deserialize)]
pub struct NamesiloRecord {
    pub record_id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub host: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub distance: u32,
}

/// `<reply>` of the mutating operations.
#[derive(Debug, Deserialize)]
pub struct AckReply {
    pub code: u32,
    #[serde(default)]
    pub detail: String,
    /// Present on `dnsAddRecord` / `dnsUpdateRecord` success.
    #[serde(default)]
    pub record_id: Option<String>,
}
