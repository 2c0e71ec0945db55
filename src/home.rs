use crate::{utils, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;

/// The `Home` object represents the file paths of the `$SPENDLOG_HOME`
/// directory and the well-known files inside it, such as
/// `$SPENDLOG_HOME/records.json`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Home {
    root: PathBuf,
    records: PathBuf,
    config: PathBuf,
}

impl Home {
    /// This will create the spendlog home directory, if it does not exist,
    /// and canonicalize itself.
    pub async fn new(spendlog_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = spendlog_home.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create spendlog home directory")?;
        let root = fs::canonicalize(&maybe_relative).await.with_context(|| {
            format!(
                "Unable to canonicalize the path {}",
                maybe_relative.display()
            )
        })?;
        Ok(Self {
            records: root.join("records.json"),
            config: root.join("config.json"),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The durable slot holding the serialized record collection.
    pub fn records(&self) -> &Path {
        &self.records
    }

    pub fn config(&self) -> &Path {
        &self.config
    }
}

#[tokio::test]
async fn test_home() {
    use tempfile::TempDir;
    let dir = TempDir::new().unwrap();
    let home_dir = dir.path().join("nested").join("spendlog");
    let home = Home::new(&home_dir).await.unwrap();
    assert!(fs::read_dir(home.root()).await.is_ok());
    assert!(home.records().ends_with("records.json"));
    assert!(home.config().ends_with("config.json"));
}
