//! Keyword → condition-builder registry
//!
//! Adding a keyword means registering a builder here; the parser and
//! evaluator never change. The process-wide registry behind
//! [`builtin_registry`] is built once and immutable afterwards; hosts that
//! want extra conditions construct their own registry and extend it.

use crate::error::SweepResult;
use crate::query::condition::{self, Predicate, QueryEnv};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Builds a predicate from the condition's single string argument.
pub type BuildFn = for<'e> fn(&str, &QueryEnv<'e>) -> SweepResult<Predicate<'e>>;

pub struct ConditionRegistry {
    builders: HashMap<String, BuildFn>,
}

impl ConditionRegistry {
    /// Empty registry, for hosts that want full control over the keyword set.
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Registry with every built-in condition keyword.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register("hastype", condition::has_type);
        registry.register("notype", condition::no_type);
        registry.register("hassubtype", condition::has_subtype);
        registry.register("nosubtype", condition::no_subtype);
        registry.register("blockslessthan", condition::blocks_less_than);
        registry.register("blocksgreaterthan", condition::blocks_greater_than);
        registry.register("ownedby", condition::owned_by);
        registry.register("name", condition::name_matches);
        registry.register("haspower", condition::has_power);
        registry.register("nopower", condition::no_power);
        registry.register("insideplanet", condition::inside_planet);
        registry
    }

    /// Register a builder under a keyword, replacing any previous entry.
    pub fn register(&mut self, keyword: impl Into<String>, build: BuildFn) {
        self.builders.insert(keyword.into(), build);
    }

    pub fn get(&self, keyword: &str) -> Option<BuildFn> {
        self.builders.get(keyword).copied()
    }

    /// Registered keywords, in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.builders.keys().map(String::as_str)
    }
}

lazy_static! {
    static ref BUILTIN: ConditionRegistry = ConditionRegistry::builtin();
}

/// The process-wide registry of built-in conditions.
pub fn builtin_registry() -> &'static ConditionRegistry {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_documented_keyword() {
        let registry = builtin_registry();
        for keyword in [
            "hastype",
            "notype",
            "hassubtype",
            "nosubtype",
            "blockslessthan",
            "blocksgreaterthan",
            "ownedby",
            "name",
            "haspower",
            "nopower",
            "insideplanet",
        ] {
            assert!(registry.get(keyword).is_some(), "missing {}", keyword);
        }
        assert!(registry.get("bogus").is_none());
    }

    fn unnamed<'e>(_arg: &str, _env: &QueryEnv<'e>) -> SweepResult<Predicate<'e>> {
        Ok(Box::new(|s| s.display_name.is_none()))
    }

    #[test]
    fn custom_keywords_extend_without_engine_changes() {
        let mut registry = ConditionRegistry::builtin();
        registry.register("unnamed", unnamed);
        assert!(registry.get("unnamed").is_some());
        assert!(registry.keywords().count() >= 12);
    }
}
