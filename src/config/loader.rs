//! Configuration loading from disk.
//!
//! The indicator is usable with zero configuration; a config file only
//! overrides defaults. [`load_config_or_default`] treats a missing file as
//! "use defaults", which is how embedding applications normally call it.

use std::fs;
use std::path::Path;

use crate::config::schema::IndicatorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<IndicatorConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: IndicatorConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Like [`load_config`], but a missing file yields the default configuration.
///
/// Any other error (unreadable file, bad TOML, failed validation) still
/// propagates.
pub fn load_config_or_default(path: &Path) -> Result<IndicatorConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let config: IndicatorConfig =
                toml::from_str(&content).map_err(ConfigError::Parse)?;
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file; using defaults");
            Ok(IndicatorConfig::default())
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}
