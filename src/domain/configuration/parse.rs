//! Pure parse/validate for `eniscope.toml`.

use crate::domain::{AppError, EniscopeConfig};

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<EniscopeConfig, AppError> {
    let config: EniscopeConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
