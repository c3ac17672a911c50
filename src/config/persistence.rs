use crate::error::{Result, WeorcanjanError};

use crate::config::paths::*;
use crate::config::schema::*;

/// Loads `config.toml` from the data directory. A missing file yields defaults.
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path()?;

    let config = if !config_path.exists() {
        tracing::debug!("No config file at {}, using defaults", config_path.display());
        Config::default()
    } else {
        let toml_content = std::fs::read_to_string(&config_path)
            .map_err(|e| WeorcanjanError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&toml_content)
            .map_err(|e| WeorcanjanError::Config(format!("Failed to parse config: {}", e)))?
    };

    validate_config(&config)?;
    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    let config_path = get_config_path()?;
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            WeorcanjanError::Config(format!("Failed to create data directory: {}", e))
        })?;
    }
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| WeorcanjanError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(&config_path, toml_str)
        .map_err(|e| WeorcanjanError::Config(format!("Failed to write config file: {}", e)))?;
    Ok(())
}
