// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Named regular-expression formats.

use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

/// Something offered for registration as a format.
#[derive(Debug, Clone)]
pub enum FormatCandidate {
    /// Pattern source to compile.
    Source(String),
    /// An already compiled pattern.
    Compiled(Regex),
    /// Anything else. Dropped on registration.
    Unsupported,
}

impl From<&str> for FormatCandidate {
    fn from(source: &str) -> Self {
        FormatCandidate::Source(source.to_string())
    }
}

impl From<String> for FormatCandidate {
    fn from(source: String) -> Self {
        FormatCandidate::Source(source)
    }
}

impl From<Regex> for FormatCandidate {
    fn from(pattern: Regex) -> Self {
        FormatCandidate::Compiled(pattern)
    }
}

impl From<&Regex> for FormatCandidate {
    fn from(pattern: &Regex) -> Self {
        FormatCandidate::Compiled(pattern.clone())
    }
}

impl From<Value> for FormatCandidate {
    fn from(value: Value) -> Self {
        match value {
            Value::String(source) => FormatCandidate::Source(source),
            _ => FormatCandidate::Unsupported,
        }
    }
}

/// Compiled formats keyed by name.
#[derive(Debug, Default, Clone)]
pub struct FormatStore {
    formats: HashMap<String, Regex>,
}

impl FormatStore {
    /// Create an empty format store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and store each candidate, overwriting earlier entries.
    ///
    /// Unsupported candidates and sources that fail to compile are skipped.
    pub fn register<I, K, P>(&mut self, formats: I)
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<FormatCandidate>,
    {
        for (name, candidate) in formats {
            let name = name.into();
            let pattern = match candidate.into() {
                FormatCandidate::Compiled(pattern) => pattern,
                FormatCandidate::Source(source) => match Regex::new(&source) {
                    Ok(pattern) => pattern,
                    Err(e) => {
                        tracing::warn!("Ignoring format '{}': invalid pattern: {}", name, e);
                        continue;
                    }
                },
                FormatCandidate::Unsupported => {
                    tracing::debug!("Ignoring format '{}': not a pattern", name);
                    continue;
                }
            };

            tracing::debug!("Registered format '{}'", name);
            self.formats.insert(name, pattern);
        }
    }

    /// Get a single compiled format.
    pub fn get(&self, name: &str) -> Option<&Regex> {
        self.formats.get(name)
    }

    /// Get every format.
    pub fn all(&self) -> &HashMap<String, Regex> {
        &self.formats
    }
}
