//! Immutable variable environment.

use crate::error::{EvalError, EvalResult};
use crate::value::Value;
use im::OrdMap;
use std::fmt;

/// Immutable mapping from variable name to [`Value`].
///
/// `extend` returns a new environment and leaves the receiver untouched,
/// so a snapshot taken before an assignment stays valid afterwards.
/// Bindings are only ever added or overwritten, never removed.
/// Backed by a persistent map: cloning and extending share structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: OrdMap<String, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable, failing with `UnboundVariable` if absent.
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.get(name)
            .copied()
            .ok_or_else(|| EvalError::UnboundVariable(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// A copy of this environment with `name` bound to `value`.
    pub fn extend(&self, name: impl Into<String>, value: Value) -> Self {
        Self {
            bindings: self.bindings.update(name.into(), value),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}
