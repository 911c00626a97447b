// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! vreg - Validation Registry
//!
//! The registration and lookup store behind a form-validation layer.
//!
//! # Features
//!
//! - **Locales**: Nested, deep-merged message trees with fuzzy locale matching
//! - **Formats**: Named regular expressions, compiled on registration
//! - **Rules**: Validator functions in tiers with fixed precedence
//! - **Templates**: Pluggable message rendering, with a Handlebars engine
//! - **Presets**: Built-in formats and English / Simplified Chinese messages
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use vreg::registry::{Registry, ValidatorResponse};
//!
//! let mut registry = Registry::with_presets();
//! registry.register_locale(json!({ "en": { "required": "{{title}} is required" } }));
//!
//! let template = registry.validation_message("required").unwrap();
//! let response = ValidatorResponse::Error(template.to_string());
//! assert_eq!(
//!     registry.render_message(&response, &json!({ "title": "Name" })),
//!     "Name is required"
//! );
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod presets;
pub mod registry;
pub mod tree;

// Re-exports for convenience
pub use config::VregConfig;
pub use error::{Result, VregError};
pub use registry::Registry;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of vreg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// The target triple vreg was built for (if available).
    pub const TARGET: Option<&str> = option_env!("VERGEN_CARGO_TARGET_TRIPLE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
