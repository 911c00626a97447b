// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation registry.
//!
//! A [`Registry`] holds four independent namespaces:
//!
//! - **Locales**: nested message trees per language plus the current language
//! - **Formats**: named, compiled regular expressions
//! - **Rules**: validator functions in `global`, `easy` and `merge` tiers
//! - **Template engine**: an optional message renderer
//!
//! Registries are plain values. Applications that want a single shared
//! instance can use [`global`].

mod formats;
mod language;
mod locale;
mod response;
mod rules;
mod store;
mod template;

pub use formats::{FormatCandidate, FormatStore};
pub use language::{
    env_provider, fixed_provider, normalize_locale, system_language, LanguageProvider,
};
pub use locale::{LocaleStore, DEFAULT_LANGUAGE, FALLBACK_MESSAGE_KEY};
pub use response::{FeedbackKind, ValidatorResponse};
pub use rules::{validator, RuleCandidate, RuleCompiler, RuleStore, RuleTier, ValidatorFunction};
pub use store::{Registry, RegistryBuilder};
pub use template::{
    handlebars_engine, render_default, render_placeholders, MessageTemplateEngine,
};

use lazy_static::lazy_static;
use std::sync::RwLock;

lazy_static! {
    /// Process-wide registry, created on first access.
    static ref GLOBAL_REGISTRY: RwLock<Registry> = RwLock::new(Registry::from_env());
}

/// Get the process-wide registry.
///
/// Take the write lock around registrations and the read lock around lookups.
pub fn global() -> &'static RwLock<Registry> {
    &GLOBAL_REGISTRY
}
