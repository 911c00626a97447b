// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The registry itself.

use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::formats::{FormatCandidate, FormatStore};
use super::language::{env_provider, LanguageProvider};
use super::locale::{LocaleStore, DEFAULT_LANGUAGE};
use super::response::ValidatorResponse;
use super::rules::{RuleCandidate, RuleCompiler, RuleStore, RuleTier, ValidatorFunction};
use super::template::{render_default, MessageTemplateEngine};

/// Registration and lookup of validation rules, formats, locale messages and
/// the message template engine.
///
/// No operation on a registry fails: unsupported registrations are dropped
/// and lookups that miss return `None`.
#[derive(Clone, Default)]
pub struct Registry {
    locales: LocaleStore,
    formats: FormatStore,
    rules: RuleStore,
    template: Option<MessageTemplateEngine>,
    compiler: Option<Arc<dyn RuleCompiler>>,
}

impl Registry {
    /// Create an empty registry whose language is `"en"`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a registry with custom collaborators.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Create an empty registry whose language is probed from the host locale.
    pub fn from_env() -> Self {
        Self::builder().language_provider(env_provider()).build()
    }

    /// Create a registry seeded with the built-in formats and locales.
    pub fn with_presets() -> Self {
        Self::builder().presets(true).build()
    }

    // Language and locales

    /// Set the current language. An empty string resets it to `"en"`.
    pub fn set_language(&mut self, language: &str) {
        self.locales.set_language(language);
        tracing::debug!("Validation language set to '{}'", self.locales.language());
    }

    /// Get the current language.
    pub fn language(&self) -> &str {
        self.locales.language()
    }

    /// Deep-merge a `{ language: { key: message } }` tree into the locale store.
    pub fn register_locale(&mut self, locales: Value) {
        self.locales.register(locales);
    }

    /// Find the registered locale key that best matches `requested`.
    ///
    /// An empty request uses the current language.
    pub fn resolve_locale_code<'a>(&'a self, requested: &'a str) -> &'a str {
        self.locales.resolve_code(requested)
    }

    /// Look up `path` in the locale for `language` (current language if `None`).
    pub fn locale_by_path(&self, path: &str, language: Option<&str>) -> Option<&Value> {
        self.locales.by_path(path, language)
    }

    /// Resolve the message for `path`, falling back to the `pattern` message in
    /// the current language and then in `"en"`.
    pub fn validation_message(&self, path: &str) -> Option<&str> {
        self.locales.validation_message(path)
    }

    /// Get the locale store.
    pub fn locales(&self) -> &LocaleStore {
        &self.locales
    }

    // Formats

    /// Register named formats. Sources are compiled; anything that is not a
    /// pattern, or does not compile, is skipped.
    pub fn register_formats<I, K, P>(&mut self, formats: I)
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<FormatCandidate>,
    {
        self.formats.register(formats);
    }

    /// Get a single compiled format.
    pub fn format(&self, name: &str) -> Option<&Regex> {
        self.formats.get(name)
    }

    /// Get every registered format.
    pub fn formats(&self) -> &HashMap<String, Regex> {
        self.formats.all()
    }

    // Rules

    /// Register rules into the global tier.
    pub fn register_rules<I, K, C>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<RuleCandidate>,
    {
        self.register_tier(RuleTier::Global, rules);
    }

    /// Register rules into the legacy shorthand tier.
    ///
    /// Kept for callers that still use it; new code should use
    /// [`Registry::register_rules`] or [`Registry::register_merge_rules`].
    pub fn register_easy_rules<I, K, C>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<RuleCandidate>,
    {
        self.register_tier(RuleTier::Easy, rules);
    }

    /// Register rules into the merge tier, which overrides every other tier.
    pub fn register_merge_rules<I, K, C>(&mut self, rules: I)
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<RuleCandidate>,
    {
        self.register_tier(RuleTier::Merge, rules);
    }

    fn register_tier<I, K, C>(&mut self, tier: RuleTier, rules: I)
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<RuleCandidate>,
    {
        self.rules.register(tier, rules, self.compiler.as_deref());
    }

    /// Get the effective rule for `name`.
    pub fn rule(&self, name: &str) -> Option<ValidatorFunction> {
        self.rules.get(name)
    }

    /// Get every rule, merged across tiers.
    pub fn rules(&self) -> HashMap<String, ValidatorFunction> {
        self.rules.merged()
    }

    // Template engine

    /// Store the message template engine, replacing any previous one.
    pub fn register_message_template_engine(&mut self, engine: MessageTemplateEngine) {
        tracing::debug!("Registered message template engine");
        self.template = Some(engine);
    }

    /// Get the registered message template engine.
    pub fn message_template_engine(&self) -> Option<MessageTemplateEngine> {
        self.template.clone()
    }

    /// Render a validator response against `context`.
    ///
    /// Uses the registered engine when there is one, otherwise substitutes
    /// `{{ key }}` placeholders from `context`.
    pub fn render_message(&self, response: &ValidatorResponse, context: &Value) -> String {
        match &self.template {
            Some(engine) => engine(response, context),
            None => render_default(response, context),
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("locales", &self.locales)
            .field("formats", &self.formats)
            .field("rules", &self.rules)
            .field("template", &self.template.is_some())
            .field("compiler", &self.compiler.is_some())
            .finish()
    }
}

/// Builder for [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    language_provider: Option<LanguageProvider>,
    compiler: Option<Arc<dyn RuleCompiler>>,
    presets: bool,
}

impl RegistryBuilder {
    /// Supply the initial language. Consulted once, in [`RegistryBuilder::build`].
    pub fn language_provider(mut self, provider: LanguageProvider) -> Self {
        self.language_provider = Some(provider);
        self
    }

    /// Transform rule candidates before the function check.
    pub fn rule_compiler(mut self, compiler: impl RuleCompiler + 'static) -> Self {
        self.compiler = Some(Arc::new(compiler));
        self
    }

    /// Seed the registry with the built-in formats and locales.
    pub fn presets(mut self, enabled: bool) -> Self {
        self.presets = enabled;
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry {
        let language = self
            .language_provider
            .and_then(|provider| provider())
            .filter(|language| !language.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let mut registry = Registry {
            locales: LocaleStore::new(&language),
            compiler: self.compiler,
            ..Registry::default()
        };

        if self.presets {
            crate::presets::install(&mut registry);
        }

        tracing::debug!("Created registry with language '{}'", registry.language());
        registry
    }
}
