//! `RegistrarClient` implementation for NameSilo

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::RegistrarClient;
use crate::types::{
    CreateRecordRequest, DeleteRecordRequest, RawResponse, UpdateRecordRequest,
};

use super::types::{AddRecordParams, DeleteRecordParams, ListRecordsParams, UpdateRecordParams};
use super::{
    NamesiloClient, OP_ADD_RECORD, OP_DELETE_RECORD, OP_LIST_RECORDS, OP_UPDATE_RECORD,
};

#[async_trait]
impl RegistrarClient for NamesiloClient {
    fn id(&self) -> &'static str {
        "namesilo"
    }

    async fn list_records(&self, domain: &str) -> Result<RawResponse> {
        self.request(OP_LIST_RECORDS, &ListRecordsParams { domain })
            .await
    }

    async fn create_record(&self, req: &CreateRecordRequest) -> Result<RawResponse> {
        let params = AddRecordParams {
            domain: &req.domain,
            rrtype: &req.record_type,
            rrhost: &req.host,
            rrvalue: &req.value,
            rrttl: req.ttl,
            rrdistance: req.priority,
        };
        self.request(OP_ADD_RECORD, &params).await
    }

    async fn update_record(&self, req: &UpdateRecordRequest) -> Result<RawResponse> {
        let params = UpdateRecordParams {
            domain: &req.domain,
            rrid: &req.record_id,
            rrhost: &req.host,
            rrvalue: &req.value,
            rrttl: req.ttl,
            rrdistance: req.priority,
        };
        self.request(OP_UPDATE_RECORD, &params).await
    }

    async fn delete_record(&self, req: &DeleteRecordRequest) -> Result<RawResponse> {
        let params = DeleteRecordParams {
            domain: &req.domain,
            rrid: &req.record_id,
        };
        self.request(OP_DELETE_RECORD, &params).await
    }
}
