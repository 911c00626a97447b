// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Locale messages and language resolution.

use serde_json::{Map, Value};

use crate::tree::{deep_merge, get_in};

/// The language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Message key every validator falls back to.
pub const FALLBACK_MESSAGE_KEY: &str = "pattern";

/// Registered message trees plus the current language.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    messages: Value,
    language: String,
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl LocaleStore {
    /// Create an empty store with the given current language.
    ///
    /// An empty language falls back to [`DEFAULT_LANGUAGE`].
    pub fn new(language: &str) -> Self {
        let mut store = Self {
            messages: Value::Object(Map::new()),
            language: String::new(),
        };
        store.set_language(language);
        store
    }

    /// Deep-merge a tree of `{ language: { key: message } }` into the store.
    ///
    /// Anything other than an object is ignored.
    pub fn register(&mut self, locales: Value) {
        match locales {
            Value::Object(map) => {
                let languages: Vec<&String> = map.keys().collect();
                tracing::debug!("Registering locale messages for {:?}", languages);
                deep_merge(&mut self.messages, Value::Object(map));
            }
            other => {
                tracing::debug!("Ignoring non-object locale registration: {}", other);
            }
        }
    }

    /// Set the current language, or reset to the default when `language` is empty.
    pub fn set_language(&mut self, language: &str) {
        self.language = if language.is_empty() {
            DEFAULT_LANGUAGE.to_string()
        } else {
            language.to_string()
        };
    }

    /// Get the current language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get every registered message tree keyed by language.
    pub fn messages(&self) -> &Value {
        &self.messages
    }

    /// Iterate registered language keys in registration order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.messages
            .as_object()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }

    /// Find the registered locale that best matches `requested`.
    ///
    /// Exact keys win. Otherwise the first key (in registration order) that
    /// contains the request, or is contained by it, ignoring case. With no
    /// match the current language is returned unchanged.
    pub fn resolve_code<'a>(&'a self, requested: &'a str) -> &'a str {
        let requested = if requested.is_empty() {
            self.language.as_str()
        } else {
            requested
        };

        let Some(map) = self.messages.as_object() else {
            return &self.language;
        };

        if map.contains_key(requested) {
            return requested;
        }

        let wanted = requested.to_lowercase();
        map.keys()
            .find(|key| {
                let key = key.to_lowercase();
                key.contains(&wanted) || wanted.contains(&key)
            })
            .map(String::as_str)
            .unwrap_or(&self.language)
    }

    /// Look up `path` in the locale resolved from `language`.
    ///
    /// `None` selects the current language.
    pub fn by_path(&self, path: &str, language: Option<&str>) -> Option<&Value> {
        let code = self.resolve_code(language.unwrap_or(""));
        let tree = self.messages.get(code)?;
        get_in(tree, path)
    }

    /// Resolve the message for `path`, degrading to the `pattern` message.
    ///
    /// Tries `path` in the current language, then `pattern` in the current
    /// language, then `pattern` in [`DEFAULT_LANGUAGE`]. Only string nodes
    /// count as messages; an empty string is still a message.
    pub fn validation_message(&self, path: &str) -> Option<&str> {
        as_message(self.by_path(path, None))
            .or_else(|| as_message(self.by_path(FALLBACK_MESSAGE_KEY, None)))
            .or_else(|| as_message(self.by_path(FALLBACK_MESSAGE_KEY, Some(DEFAULT_LANGUAGE))))
    }
}

fn as_message(node: Option<&Value>) -> Option<&str> {
    node.and_then(Value::as_str)
}
