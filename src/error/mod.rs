// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for vreg.
//!
//! The registry itself never fails: malformed registrations are dropped and
//! lookup misses return `None`. These errors cover the surfaces around it,
//! namely configuration loading and the command line.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for vreg operations.
#[derive(Error, Debug)]
pub enum VregError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Format lookup errors
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Errors raised when a caller asks about a specific format.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unknown format: '{name}'")]
    Unknown { name: String },

    #[error("Input '{input}' does not match format '{name}'")]
    Mismatch { name: String, input: String },
}

/// Result type alias for vreg operations.
pub type Result<T> = std::result::Result<T, VregError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| VregError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/vreg.toml"),
        };
        assert!(err.to_string().contains("/path/to/vreg.toml"));
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::Mismatch {
            name: "email".to_string(),
            input: "nope".to_string(),
        };
        assert!(err.to_string().contains("email"));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_vreg_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            key: "template.engine".to_string(),
            message: "unknown engine".to_string(),
        };
        let err: VregError = config_err.into();
        assert!(err.to_string().contains("template.engine"));
    }

    #[test]
    fn test_result_ext_context() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("{oops");
        let err = parsed.context("Invalid --context").unwrap_err();
        assert!(err.to_string().starts_with("Invalid --context: "));
    }
}
