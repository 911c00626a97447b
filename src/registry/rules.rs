// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Tiered rule tables.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::response::ValidatorResponse;

/// A validator callable: `(value, rule, context) -> response`.
pub type ValidatorFunction =
    Arc<dyn Fn(&Value, &Value, &Value) -> ValidatorResponse + Send + Sync>;

/// Wrap a closure as a [`ValidatorFunction`].
pub fn validator<F>(f: F) -> ValidatorFunction
where
    F: Fn(&Value, &Value, &Value) -> ValidatorResponse + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Something offered for registration as a rule.
///
/// Only [`RuleCandidate::Function`] is ever stored. Plain values model what a
/// dynamic caller or a schema may hand over and are dropped on registration.
#[derive(Clone)]
pub enum RuleCandidate {
    Function(ValidatorFunction),
    Value(Value),
}

impl RuleCandidate {
    /// Build a function candidate from a closure.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value, &Value, &Value) -> ValidatorResponse + Send + Sync + 'static,
    {
        RuleCandidate::Function(validator(f))
    }

    fn into_function(self) -> Option<ValidatorFunction> {
        match self {
            RuleCandidate::Function(f) => Some(f),
            RuleCandidate::Value(_) => None,
        }
    }
}

impl fmt::Debug for RuleCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleCandidate::Function(_) => f.write_str("Function(..)"),
            RuleCandidate::Value(v) => f.debug_tuple("Value").field(v).finish(),
        }
    }
}

impl From<ValidatorFunction> for RuleCandidate {
    fn from(f: ValidatorFunction) -> Self {
        RuleCandidate::Function(f)
    }
}

impl From<Value> for RuleCandidate {
    fn from(value: Value) -> Self {
        RuleCandidate::Value(value)
    }
}

/// Transform applied to every rule candidate before the function check.
///
/// This is where a schema compiler can turn a declarative rule into a
/// callable. The default registry uses the identity transform.
pub trait RuleCompiler: Send + Sync {
    /// Compile a candidate registered under `name`.
    fn compile(&self, name: &str, candidate: RuleCandidate) -> RuleCandidate;
}

impl<F> RuleCompiler for F
where
    F: Fn(&str, RuleCandidate) -> RuleCandidate + Send + Sync,
{
    fn compile(&self, name: &str, candidate: RuleCandidate) -> RuleCandidate {
        self(name, candidate)
    }
}

/// Rule tiers, in increasing precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleTier {
    /// Rules registered explicitly by the application.
    Global,
    /// Legacy shorthand rules. Usually empty.
    Easy,
    /// Rules merged in from elsewhere, e.g. derived from a schema.
    Merge,
}

impl RuleTier {
    /// All tiers, lowest precedence first.
    pub const ORDER: [RuleTier; 3] = [RuleTier::Global, RuleTier::Easy, RuleTier::Merge];

    /// Get the tier name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleTier::Global => "global",
            RuleTier::Easy => "easy",
            RuleTier::Merge => "merge",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Storage for all rule tiers.
#[derive(Default, Clone)]
pub struct RuleStore {
    tiers: [HashMap<String, ValidatorFunction>; 3],
}

impl RuleStore {
    /// Create an empty rule store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register candidates into `tier`, dropping anything that is not a function
    /// after `compiler` has run.
    pub fn register<I, K, C>(&mut self, tier: RuleTier, rules: I, compiler: Option<&dyn RuleCompiler>)
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<RuleCandidate>,
    {
        let table = &mut self.tiers[tier.index()];

        for (name, candidate) in rules {
            let name = name.into();
            let candidate = match compiler {
                Some(compiler) => compiler.compile(&name, candidate.into()),
                None => candidate.into(),
            };

            match candidate.into_function() {
                Some(rule) => {
                    tracing::debug!("Registered {} rule '{}'", tier.as_str(), name);
                    table.insert(name, rule);
                }
                None => {
                    tracing::debug!("Ignoring non-function {} rule '{}'", tier.as_str(), name);
                }
            }
        }
    }

    /// Get the effective rule for `name`, honouring tier precedence.
    pub fn get(&self, name: &str) -> Option<ValidatorFunction> {
        RuleTier::ORDER
            .iter()
            .rev()
            .find_map(|tier| self.tiers[tier.index()].get(name))
            .cloned()
    }

    /// Merge all tiers into one table, later tiers overwriting earlier ones.
    pub fn merged(&self) -> HashMap<String, ValidatorFunction> {
        let mut merged = HashMap::new();
        for tier in RuleTier::ORDER {
            for (name, rule) in &self.tiers[tier.index()] {
                merged.insert(name.clone(), Arc::clone(rule));
            }
        }
        merged
    }

    /// Get the raw table for a single tier.
    pub fn tier(&self, tier: RuleTier) -> &HashMap<String, ValidatorFunction> {
        &self.tiers[tier.index()]
    }
}

impl fmt::Debug for RuleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for tier in RuleTier::ORDER {
            let mut names: Vec<&String> = self.tier(tier).keys().collect();
            names.sort();
            map.entry(&tier.as_str(), &names);
        }
        map.finish()
    }
}
