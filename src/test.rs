//! Shared test utilities for creating test environments.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::home::Home;
use crate::model::Record;
use crate::store::Store;
use tempfile::TempDir;

/// Test environment that sets up a spendlog home directory inside a temp
/// dir. Holds the TempDir to keep the directory alive for the duration of
/// the test.
pub struct TestEnv {
    _temp_dir: TempDir,
    home: Home,
}

impl TestEnv {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let home = Home::new(temp_dir.path().join("spendlog")).await.unwrap();
        Self {
            _temp_dir: temp_dir,
            home,
        }
    }

    pub fn home(&self) -> &Home {
        &self.home
    }

    /// Writes the given records straight into the durable slot. Fixtures
    /// that need timestamps in specific months go through here, since live
    /// `add` calls always stamp the current time.
    pub async fn seed(&self, records: &[Record]) {
        Store::new(&self.home).save(records).await.unwrap();
    }
}
