//! Record matching for set/delete reconciliation.
//!
//! Records are matched on type plus zone-relative hostname. Each existing record
//! binds to at most one requested record per call: once matched it leaves the
//! pool, so duplicates in the request bind to distinct existing records in
//! listing order.

use crate::providers::common::{same_host, same_type};
use crate::types::Record;

/// Existing registrar records still available for matching.
///
/// Built fresh from a listing for every reconciliation call and dropped with it.
#[derive(Debug)]
pub struct RecordPool<'z> {
    zone: &'z str,
    available: Vec<Record>,
}

impl<'z> RecordPool<'z> {
    pub fn new(zone: &'z str, current: Vec<Record>) -> Self {
        Self {
            zone,
            available: current,
        }
    }

    /// Remove and return the first available record with the same type and host.
    pub fn take_match(&mut self, wanted: &Record) -> Option<Record> {
        let index = self.available.iter().position(|current| {
            same_type(&current.record_type, &wanted.record_type)
                && same_host(self.zone, &current.name, &wanted.name)
        })?;
        Some(self.available.remove(index))
    }

    /// Records not consumed so far.
    pub fn remaining(&self) -> &[Record] {
        &self.available
    }
}

/// Outcome of partitioning desired records for a set call.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SetPlan {
    /// Records with no registrar counterpart, in input order.
    pub creates: Vec<Record>,
    /// Records carrying a registrar ID (given or matched), in input order.
    pub updates: Vec<Record>,
}

/// Partition `desired` into creates and updates against `current`.
///
/// A desired record with an ID is an update as-is. Otherwise the first available
/// current record with the same type and host lends its ID and is consumed.
pub fn plan_set(zone: &str, current: Vec<Record>, desired: &[Record]) -> SetPlan {
    let mut pool = RecordPool::new(zone, current);
    let mut plan = SetPlan::default();

    for record in desired {
        if record.has_id() {
            plan.updates.push(record.clone());
            continue;
        }

        match pool.take_match(record) {
            Some(existing) => plan.updates.push(Record {
                id: existing.id,
                ..record.clone()
            }),
            None => plan.creates.push(record.clone()),
        }
    }

    plan
}

/// Select the current records to delete for `requested`, in match order.
///
/// Requested records without a match are skipped.
pub fn plan_delete(zone: &str, current: Vec<Record>, requested: &[Record]) -> Vec<Record> {
    let mut pool = RecordPool::new(zone, current);
    requested
        .iter()
        .filter_map(|record| pool.take_match(record))
        .collect()
}
