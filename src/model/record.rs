use crate::model::{Amount, Category};
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identity of a record, assigned once at creation.
///
/// Deletion operates on this id, never on a position in any view of the
/// collection.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(RecordId)
    }
}

/// A single expense entry.
///
/// The id and timestamp are stamped at creation and immutable thereafter.
/// There is no update operation; a record lives in the ledger's sequence
/// until it is deleted.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Record {
    id: RecordId,
    description: String,
    amount: Amount,
    category: Category,
    timestamp: DateTime<Utc>,
}

impl Record {
    /// Constructs a record stamped with the current time and a fresh id.
    /// The caller is responsible for validating the description beforehand.
    pub(crate) fn new(description: String, amount: Amount, category: Category) -> Self {
        Self {
            id: RecordId::generate(),
            description,
            amount,
            category,
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The record's calendar month in local time, as a 0-11 index.
    pub fn local_month(&self) -> u32 {
        self.timestamp.with_timezone(&Local).month0()
    }

    /// The record's calendar date in local time.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }

    #[cfg(test)]
    pub(crate) fn with_timestamp(
        description: &str,
        amount: Amount,
        category: Category,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            description: description.to_string(),
            amount,
            category,
            timestamp,
        }
    }
}
