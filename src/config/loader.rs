// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and loading.

use crate::error::{ConfigError, Result, VregError};
use std::path::{Path, PathBuf};

use super::schema::VregConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["vreg.toml", ".vreg.toml", ".config/vreg.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = first_existing(&current) {
            return Some(found);
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = first_existing(&home) {
            return Some(found);
        }
    }

    // XDG config directory
    let xdg = dirs::config_dir()?.join("vreg").join("config.toml");
    xdg.exists().then_some(xdg)
}

fn first_existing(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<VregConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(VregConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<VregConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(VregError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        VregError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<VregConfig> {
    let config: VregConfig = toml::from_str(content).map_err(|e| {
        VregError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    validate_config(&config)?;
    Ok(config)
}

/// Reject values that deserialize but cannot describe a registry.
fn validate_config(config: &VregConfig) -> Result<()> {
    if let Some(language) = &config.language {
        if language.trim().is_empty() {
            return Err(VregError::Config(ConfigError::InvalidValue {
                key: "language".to_string(),
                message: "must not be empty".to_string(),
            }));
        }
    }

    for (language, messages) in &config.locales {
        if !messages.is_object() {
            return Err(VregError::Config(ConfigError::InvalidValue {
                key: format!("locales.{}", language),
                message: "must be a table of messages".to_string(),
            }));
        }
    }

    Ok(())
}
