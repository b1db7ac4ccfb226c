//! Configuration discovery, CLI overrides and backend selection.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::adapters::{HttpInventoryClient, InventorySnapshot};
use crate::domain::configuration::parse_config_content;
use crate::domain::{AppError, EniscopeConfig, InventoryConfig, InventorySource};
use crate::ports::InventoryService;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "eniscope.toml";

/// Environment variable naming an alternative configuration file.
pub const CONFIG_ENV: &str = "ENISCOPE_CONFIG";

/// Load configuration from `explicit`, `$ENISCOPE_CONFIG`, or `./eniscope.toml`.
///
/// Falls back to defaults when no file is named and none exists in the
/// working directory. A named file that does not exist is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<EniscopeConfig, AppError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return load_config_file(Path::new(&path));
    }

    let default_path = Path::new(CONFIG_FILE);
    if default_path.is_file() {
        return load_config_file(default_path);
    }

    debug!("no configuration file found, using defaults");
    Ok(EniscopeConfig::default())
}

/// Load and validate one configuration file.
///
/// A relative `snapshot` path is resolved against the file's directory.
pub fn load_config_file(path: &Path) -> Result<EniscopeConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!("Config file not found: {}", path.display())));
    }

    debug!(path = %path.display(), "loading configuration");
    let content = fs::read_to_string(path)?;
    let mut config = parse_config_content(&content)?;

    if let Some(snapshot) = config.inventory.snapshot.take() {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.inventory.snapshot = Some(base.join(snapshot));
    }
    Ok(config)
}

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<Url>,
    pub snapshot: Option<PathBuf>,
    pub region: Option<String>,
}

impl ConfigOverrides {
    /// Apply overrides; selecting one backend clears the other.
    pub fn apply(self, config: &mut InventoryConfig) {
        if let Some(endpoint) = self.endpoint {
            config.endpoint = Some(endpoint);
            config.snapshot = None;
        }
        if let Some(snapshot) = self.snapshot {
            config.snapshot = Some(snapshot);
            config.endpoint = None;
        }
        if let Some(region) = self.region {
            config.region = Some(region);
        }
    }
}

/// Build the inventory backend selected by `config`.
pub fn connect(config: &InventoryConfig) -> Result<Box<dyn InventoryService>, AppError> {
    config.validate()?;
    match config.source()? {
        InventorySource::Http(endpoint) => {
            debug!(endpoint = %endpoint, "using HTTP inventory gateway");
            Ok(Box::new(HttpInventoryClient::from_config(endpoint, config)?))
        }
        InventorySource::Snapshot(path) => {
            debug!(path = %path.display(), "using inventory snapshot");
            Ok(Box::new(InventorySnapshot::load(path)?))
        }
    }
}
