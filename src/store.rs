//! This module is responsible for reading and writing the durable record
//! slot, `$SPENDLOG_HOME/records.json`.
//!
//! The slot holds the entire record collection as one JSON array. Saves
//! rewrite the whole file by writing a sibling temp file and renaming it
//! over the slot, so a reader never observes a partial write. There is no
//! versioning or migration of the persisted schema.

use crate::error::StoreError;
use crate::home::Home;
use crate::model::Record;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(home: &Home) -> Self {
        Self {
            path: home.records().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full record collection from the slot.
    ///
    /// A missing slot is an empty collection. A slot that exists but cannot
    /// be read back is `StoreError::CorruptState`.
    pub async fn load(&self) -> Result<Vec<Record>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::corrupt(&self.path, e)),
        };
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(|e| StoreError::corrupt(&self.path, e))?;
        debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Serializes the entire collection and overwrites the slot.
    ///
    /// The JSON is written to a temp file next to the slot and renamed into
    /// place, so the caller never observes a partially written slot.
    pub async fn save(&self, records: &[Record]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::persist(&self.path, e))?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| StoreError::persist(&self.path, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::persist(&self.path, e))?;
        debug!("persisted {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
