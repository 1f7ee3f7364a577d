//! Runtime values: the two result kinds every expression reduces to.

use crate::error::{EvalError, EvalResult};
use std::fmt;

/// A fully evaluated SIMPLE value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Number(i64),
    Boolean(bool),
}

impl Value {
    /// Name of the value's kind, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Boolean(_) => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::Number(_) => None,
        }
    }

    /// Unwrap a branch or loop condition, which must be a boolean.
    pub fn expect_boolean(&self) -> EvalResult<bool> {
        self.as_boolean().ok_or_else(|| {
            EvalError::TypeMismatch(format!(
                "condition must be a boolean, got {} {self}",
                self.type_name()
            ))
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}
