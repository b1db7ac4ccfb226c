//! Inventory configuration domain models.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `eniscope.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EniscopeConfig {
    /// Where inventory data comes from.
    #[serde(default)]
    pub inventory: InventoryConfig,
}

impl EniscopeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.inventory.validate()
    }
}

/// Inventory service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryConfig {
    /// Base URL of the HTTP inventory gateway.
    #[serde(default)]
    pub endpoint: Option<Url>,
    /// Path to an offline JSON snapshot.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
    /// Provider region, forwarded to the gateway.
    #[serde(default)]
    pub region: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Environment variable holding the bearer token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            snapshot: None,
            region: None,
            timeout_secs: default_timeout(),
            token_env: default_token_env(),
        }
    }
}

/// The single inventory backend a configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventorySource<'a> {
    Http(&'a Url),
    Snapshot(&'a Path),
}

impl InventoryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.token_env.trim().is_empty() {
            return Err(AppError::InvalidConfig("token_env must not be empty".to_string()));
        }
        if self.region.as_deref().is_some_and(|r| r.trim().is_empty()) {
            return Err(AppError::InvalidConfig("region must not be empty when set".to_string()));
        }
        Ok(())
    }

    /// Resolve the configured backend; exactly one of `endpoint` and `snapshot` must be set.
    pub fn source(&self) -> Result<InventorySource<'_>, AppError> {
        match (&self.endpoint, &self.snapshot) {
            (Some(url), None) => Ok(InventorySource::Http(url)),
            (None, Some(path)) => Ok(InventorySource::Snapshot(path)),
            (Some(_), Some(_)) => Err(AppError::InvalidConfig(
                "endpoint and snapshot are mutually exclusive".to_string(),
            )),
            (None, None) => Err(AppError::InvalidConfig(
                "no inventory source configured: set endpoint or snapshot".to_string(),
            )),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_token_env() -> String {
    "ENISCOPE_TOKEN".to_string()
}
