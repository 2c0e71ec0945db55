//! Configuration file handling for spendlog.
//!
//! The configuration file is stored at `$SPENDLOG_HOME/config.json` and
//! holds presentation settings. It is created with defaults the first time
//! the program runs against a home directory.

use crate::home::Home;
use crate::{utils, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};

const CONFIG_VERSION: u8 = 1;
const DEFAULT_CURRENCY_LABEL: &str = "MMK";

/// Presentation settings loaded from `config.json`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    config_version: u8,
    /// Label appended to displayed amounts, e.g. `1,500.00 MMK`. Purely
    /// cosmetic; amounts carry no currency.
    currency_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_version: CONFIG_VERSION,
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
        }
    }
}

impl Config {
    /// Loads `config.json` from the home directory. If the file does not
    /// exist yet, default settings are written there and returned.
    pub async fn load_or_create(home: &Home) -> Result<Self> {
        let path = home.config();
        if path.is_file() {
            return utils::deserialize(path).await;
        }
        let config = Self::default();
        config.save(home).await?;
        Ok(config)
    }

    /// Saves the configuration to `config.json` in the home directory.
    pub async fn save(&self, home: &Home) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;
        utils::write(home.config(), json).await
    }

    pub fn currency_label(&self) -> &str {
        &self.currency_label
    }
}
