//! Error types for the spendlog crate.
//!
//! Most plumbing uses `anyhow` with context. The persistence layer has two
//! failure modes the rest of the crate must tell apart, so those are typed.

use std::path::{Path, PathBuf};

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Failures of the durable record slot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The slot exists but cannot be read back as a record collection. The
    /// ledger falls back to an empty collection instead of crashing; the
    /// file on disk is left alone until the next successful save overwrites
    /// it.
    #[error("stored ledger data at '{path}' is corrupt or unreadable")]
    CorruptState {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },

    /// Writing the slot failed. In-memory state remains authoritative; the
    /// next successful mutation rewrites the full collection.
    #[error("failed to persist ledger data to '{path}'")]
    PersistFailure {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },
}

impl StoreError {
    pub(crate) fn corrupt(path: &Path, source: impl Into<BoxedSource>) -> Self {
        StoreError::CorruptState {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn persist(path: &Path, source: impl Into<BoxedSource>) -> Self {
        StoreError::PersistFailure {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}
