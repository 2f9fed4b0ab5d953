//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::Result;
use std::path::Path;

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<NoteBenderConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config: NoteBenderConfig = serde_yaml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration if the file exists, defaults otherwise
pub fn load_config_or_default(path: &Path) -> Result<NoteBenderConfig> {
    if path.exists() {
        load_config(path)
    } else {
        log::debug!("No configuration at {:?}, using defaults", path);
        Ok(NoteBenderConfig::default())
    }
}
