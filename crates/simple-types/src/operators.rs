//! Binary operator semantics.
//!
//! Reduction, evaluation and compiled closures all combine operands here,
//! which is what keeps the three strategies in agreement.

use crate::ast::BinOp;
use crate::error::{EvalError, EvalResult};
use crate::value::Value;

impl BinOp {
    /// Combine two fully evaluated operands.
    ///
    /// Arithmetic wraps on overflow.
    pub fn apply(self, left: Value, right: Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(match self {
                Self::Add => Value::Number(a.wrapping_add(b)),
                Self::Multiply => Value::Number(a.wrapping_mul(b)),
                Self::LessThan => Value::Boolean(a < b),
            }),
            _ => Err(EvalError::TypeMismatch(format!(
                "cannot apply '{}' to {} and {}",
                self.symbol(),
                left.type_name(),
                right.type_name()
            ))),
        }
    }
}
