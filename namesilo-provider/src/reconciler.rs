//! Record reconciliation over a [`RegistrarClient`].
//!
//! Every call is sequential: one registrar request at a time, each awaited
//! before the next. `set_records` and `delete_records` start from a fresh
//! listing; nothing is cached between calls. Dropping a returned future aborts
//! the in-flight request and issues no further ones.

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::matching::{plan_delete, plan_set};
use crate::providers::common::{relative_host, zone_domain};
use crate::providers::{
    NamesiloClient, OP_ADD_RECORD, OP_DELETE_RECORD, OP_LIST_RECORDS, OP_UPDATE_RECORD,
    ReplyDecoder,
};
use crate::traits::{DnsRecordProvider, ErrorContext, RegistrarClient};
use crate::types::{CreateRecordRequest, DeleteRecordRequest, Record, UpdateRecordRequest};

/// Maps list/append/set/delete onto registrar create/update/delete calls.
pub struct RecordReconciler<C = NamesiloClient> {
    client: C,
    decoder: ReplyDecoder,
}

/// Reconciler talking to the live NameSilo API.
pub type NamesiloProvider = RecordReconciler<NamesiloClient>;

impl NamesiloProvider {
    /// Provider with default endpoint and timeouts.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::new(NamesiloClient::new(api_key)?))
    }
}

impl<C: RegistrarClient> RecordReconciler<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            decoder: ReplyDecoder,
        }
    }

    /// Underlying registrar client.
    pub fn client(&self) -> &C {
        &self.client
    }

    async fn fetch(&self, zone: &str) -> Result<Vec<Record>> {
        let domain = zone_domain(zone);
        let raw = self.client.list_records(&domain).await?;
        self.decoder
            .records(&raw, zone, ErrorContext::new(OP_LIST_RECORDS, &domain, ""))
    }

    async fn create_all(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let domain = zone_domain(zone);
        let mut created = Vec::with_capacity(records.len());

        for record in records {
            let host = relative_host(zone, &record.name);
            let req = CreateRecordRequest {
                domain: domain.clone(),
                record_type: record.record_type.clone(),
                host: host.clone(),
                value: record.value.clone(),
                ttl: record.ttl_param(),
                priority: record.priority_param(),
            };

            let raw = self.client.create_record(&req).await?;
            let new_id = self
                .decoder
                .acknowledge(&raw, ErrorContext::new(OP_ADD_RECORD, &domain, &host))?;
            log::debug!(
                "[{}] created {} '{host}' in {domain} (id {})",
                self.client.id(),
                record.record_type,
                new_id.as_deref().unwrap_or("?")
            );

            created.push(record.clone());
        }

        Ok(created)
    }

    async fn update_all(&self, zone: &str, records: Vec<Record>) -> Result<Vec<Record>> {
        let domain = zone_domain(zone);
        let mut updated = Vec::with_capacity(records.len());

        for record in records {
            let host = relative_host(zone, &record.name);
            log::debug!(
                "[{}] updating record id {} ('{host}' in {domain})",
                self.client.id(),
                record.id
            );
            let req = UpdateRecordRequest {
                domain: domain.clone(),
                record_id: record.id.clone(),
                host: host.clone(),
                value: record.value.clone(),
                ttl: record.ttl_param(),
                priority: record.priority_param(),
            };

            let raw = self.client.update_record(&req).await?;
            self.decoder
                .acknowledge(&raw, ErrorContext::new(OP_UPDATE_RECORD, &domain, &host))?;

            updated.push(record);
        }

        Ok(updated)
    }

    async fn delete_all(&self, zone: &str, records: Vec<Record>) -> Result<Vec<Record>> {
        let domain = zone_domain(zone);
        let mut deleted = Vec::with_capacity(records.len());

        for record in records {
            let host = relative_host(zone, &record.name);
            let req = DeleteRecordRequest {
                domain: domain.clone(),
                record_id: record.id.clone(),
            };

            let raw = self.client.delete_record(&req).await?;
            self.decoder
                .acknowledge(&raw, ErrorContext::new(OP_DELETE_RECORD, &domain, &host))?;

            deleted.push(record);
        }

        Ok(deleted)
    }

    async fn reconcile_set(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let current = self.fetch(zone).await?;
        let plan = plan_set(zone, current, records);
        log::debug!(
            "[{}] SetRecords {zone}: {} to create, {} to update",
            self.client.id(),
            plan.creates.len(),
            plan.updates.len()
        );

        let mut applied = self.create_all(zone, &plan.creates).await?;
        applied.extend(self.update_all(zone, plan.updates).await?);
        Ok(applied)
    }

    async fn reconcile_delete(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let current = self.fetch(zone).await?;
        let doomed = plan_delete(zone, current, records);
        if doomed.len() < records.len() {
            log::debug!(
                "[{}] DeleteRecords {zone}: {} of {} records have no match",
                self.client.id(),
                records.len() - doomed.len(),
                records.len()
            );
        }
        self.delete_all(zone, doomed).await
    }

    fn log_failure(&self, operation: &str, zone: &str, err: &ProviderError) {
        if err.is_expected() {
            log::warn!("[{}] {operation} on {zone} failed: {err}", self.client.id());
        } else {
            log::error!("[{}] {operation} on {zone} failed: {err}", self.client.id());
        }
    }
}

#[async_trait]
impl<C: RegistrarClient> DnsRecordProvider for RecordReconciler<C> {
    fn id(&self) -> &'static str {
        self.client.id()
    }

    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        log::info!("[{}] GetRecords {zone}", self.id());
        self.fetch(zone)
            .await
            .inspect_err(|e| self.log_failure("GetRecords", zone, e))
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        log::info!("[{}] AppendRecords {zone} ({} records)", self.id(), records.len());
        self.create_all(zone, records)
            .await
            .inspect_err(|e| self.log_failure("AppendRecords", zone, e))
    }

    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        log::info!("[{}] SetRecords {zone} ({} records)", self.id(), records.len());
        self.reconcile_set(zone, records)
            .await
            .inspect_err(|e| self.log_failure("SetRecords", zone, e))
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        log::info!("[{}] DeleteRecords {zone} ({} records)", self.id(), records.len());
        self.reconcile_delete(zone, records)
            .await
            .inspect_err(|e| self.log_failure("DeleteRecords", zone, e))
    }
}
