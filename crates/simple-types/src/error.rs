//! Runtime error types shared by reduction, evaluation and compiled code.

use thiserror::Error;

/// Evaluation error: aborts the current reduce/evaluate/compiled call.
///
/// All three execution strategies raise these through the same helpers,
/// so for a given node and environment they fail with equal errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Lookup of a name absent from the environment.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    /// An operator or condition applied to a value of the wrong kind.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// `reduce` called on a node already in normal form.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// A configured gas limit was reached before a normal form.
    #[error("gas exhausted after {0} steps")]
    GasExhausted(u64),
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EvalError::UnboundVariable("y".into()).to_string(),
            "unbound variable: y"
        );
        assert_eq!(
            EvalError::TypeMismatch("cannot add boolean and number".into()).to_string(),
            "type mismatch: cannot add boolean and number"
        );
        assert_eq!(EvalError::GasExhausted(10).to_string(), "gas exhausted after 10 steps");
    }

    #[test]
    fn test_errors_compare_structurally() {
        assert_eq!(
            EvalError::UnboundVariable("x".into()),
            EvalError::UnboundVariable("x".into())
        );
        assert_ne!(
            EvalError::UnboundVariable("x".into()),
            EvalError::UnboundVariable("y".into())
        );
    }
}
