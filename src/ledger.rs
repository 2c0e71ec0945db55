//! The ledger owns the in-memory ordered record collection and keeps the
//! durable slot in lockstep with it: every successful mutation re-serializes
//! the entire collection before the operation is considered complete.

use crate::error::StoreError;
use crate::model::{Amount, Category, Record, RecordId};
use crate::store::Store;
use crate::Result;
use anyhow::bail;
use tracing::{debug, warn};

/// The ordered collection of expense records.
///
/// Order is insertion order; records are never re-sorted. Duplicate field
/// values are permitted; identity is the `RecordId`. Amounts are finite by
/// construction (see [`crate::model::Amount`]), so no amount validation
/// happens here.
#[derive(Debug)]
pub struct Ledger {
    records: Vec<Record>,
    store: Store,
}

impl Ledger {
    /// Loads the ledger from the durable slot.
    ///
    /// A corrupt slot logs a warning and yields an empty ledger rather than
    /// failing; the slot is rewritten on the next successful mutation.
    pub async fn load(store: Store) -> Result<Self> {
        let records = match store.load().await {
            Ok(records) => records,
            Err(e @ StoreError::CorruptState { .. }) => {
                warn!("{e}; starting with an empty ledger");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { records, store })
    }

    /// The full current sequence, read-only.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record stamped with the current time, then persists the
    /// full collection.
    ///
    /// An empty description is rejected as a silent no-op: `Ok(None)` with
    /// nothing appended and nothing persisted; the caller re-prompts the
    /// user. If the persistence write fails the record stays in memory and
    /// the error is returned; in-memory state is authoritative until a
    /// later full rewrite succeeds.
    pub async fn add(
        &mut self,
        description: impl Into<String>,
        amount: Amount,
        category: Category,
    ) -> Result<Option<RecordId>> {
        let description = description.into();
        if description.is_empty() {
            debug!("rejected a record with an empty description");
            return Ok(None);
        }
        let record = Record::new(description, amount, category);
        let id = record.id();
        self.records.push(record);
        self.store.save(&self.records).await?;
        Ok(Some(id))
    }

    /// Removes the record with the given id, then persists the full
    /// collection. An unknown id is an error and changes nothing.
    pub async fn remove(&mut self, id: RecordId) -> Result<Record> {
        let Some(position) = self.records.iter().position(|r| r.id() == id) else {
            bail!("No record found with id '{id}'");
        };
        let record = self.records.remove(position);
        self.store.save(&self.records).await?;
        Ok(record)
    }
}
