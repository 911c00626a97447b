// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from vreg.toml.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::registry::{env_provider, fixed_provider, handlebars_engine, Registry};

/// The main configuration structure for vreg.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VregConfig {
    /// Initial validation language. Unset means detect or fall back to "en".
    pub language: Option<String>,

    /// Probe the host locale environment when `language` is unset.
    pub detect_language: bool,

    /// Seed the registry with the built-in formats and locales.
    pub presets: bool,

    /// Template engine configuration.
    pub template: TemplateConfig,

    /// Additional formats, name to pattern source.
    pub formats: BTreeMap<String, String>,

    /// Additional locale messages, `language -> { key: message }`.
    pub locales: Map<String, Value>,
}

impl Default for VregConfig {
    fn default() -> Self {
        Self {
            language: None,
            detect_language: false,
            presets: true,
            template: TemplateConfig::default(),
            formats: BTreeMap::new(),
            locales: Map::new(),
        }
    }
}

impl VregConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Build a registry from this configuration.
    ///
    /// Presets are installed first so that configured formats and locales
    /// override them.
    pub fn build_registry(&self) -> Registry {
        let mut builder = Registry::builder().presets(self.presets);

        builder = match (&self.language, self.detect_language) {
            (Some(language), _) => builder.language_provider(fixed_provider(language.clone())),
            (None, true) => builder.language_provider(env_provider()),
            (None, false) => builder,
        };

        let mut registry = builder.build();
        registry.register_formats(self.formats.clone());
        registry.register_locale(Value::Object(self.locales.clone()));

        if self.template.engine == TemplateEngineKind::Handlebars {
            registry.register_message_template_engine(handlebars_engine());
        }

        registry
    }
}

/// Template engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TemplateConfig {
    /// Which engine renders messages.
    pub engine: TemplateEngineKind,
}

/// Available message template engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateEngineKind {
    /// Built-in `{{ key }}` substitution.
    #[default]
    Placeholder,
    /// Handlebars templates.
    Handlebars,
}
