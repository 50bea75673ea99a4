//! Named weight function registry

use lexsent_core::{identity, CoreError, WeightFn, BUILTIN_WEIGHTS};
use std::collections::BTreeMap;
use std::fmt;

/// A resolved weight function together with the name it was selected by
#[derive(Clone, Copy)]
pub struct WeightFunction {
    name: &'static str,
    func: WeightFn,
}

impl WeightFunction {
    /// Identity weighting
    pub const IDENTITY: WeightFunction = WeightFunction {
        name: "identity",
        func: identity,
    };

    /// Name the function is registered under
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The function itself
    pub fn func(&self) -> WeightFn {
        self.func
    }

    /// Apply to one raw score
    pub fn apply(&self, score: f64, position: usize, doc_len: usize) -> f64 {
        (self.func)(score, position, doc_len)
    }
}

impl Default for WeightFunction {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Debug for WeightFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeightFunction").field(&self.name).finish()
    }
}

impl PartialEq for WeightFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.func as usize == other.func as usize
    }
}

/// Maps names to weight functions
#[derive(Clone)]
pub struct WeightRegistry {
    functions: BTreeMap<&'static str, WeightFn>,
}

impl Default for WeightRegistry {
    fn default() -> Self {
        Self {
            functions: BUILTIN_WEIGHTS.into_iter().collect(),
        }
    }
}

impl fmt::Debug for WeightRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.functions.keys()).finish()
    }
}

impl WeightRegistry {
    /// Registry with the built-in functions (`noop`, `identity`, `linear`, `cosine`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a function
    pub fn register(&mut self, name: &'static str, func: WeightFn) {
        self.functions.insert(name, func);
    }

    /// Look up a function by name
    pub fn get(&self, name: &str) -> Result<WeightFunction, CoreError> {
        self.functions
            .get_key_value(name)
            .map(|(&name, &func)| WeightFunction { name, func })
            .ok_or_else(|| CoreError::UnknownWeightFunction {
                name: name.to_string(),
            })
    }

    /// Look up a function by name, falling back to identity for unknown names
    pub fn resolve(&self, name: &str) -> WeightFunction {
        self.get(name).unwrap_or_else(|err| {
            log::warn!("{err}; using identity weighting");
            WeightFunction::IDENTITY
        })
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }
}
