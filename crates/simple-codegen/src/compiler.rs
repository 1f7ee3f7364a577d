//! Closure compiler.
//!
//! Translates an [`Expr`] once into a [`CompiledExpr`] that can be invoked
//! any number of times against different environments. Compilation never
//! fails; errors surface when the compiled code runs, exactly where
//! `evaluate` would raise them.

use std::fmt;

use simple_types::{Environment, EvalResult, Expr, Value};

use crate::expr::{emit_expr, Code};

// ══════════════════════════════════════════════════════════════════════════════
// Public API
// ══════════════════════════════════════════════════════════════════════════════

/// Compile an expression into a reusable callable.
pub fn compile(expr: &Expr) -> CompiledExpr {
    let source = expr.to_string();
    tracing::trace!(%source, "compiling expression");
    CompiledExpr {
        code: emit_expr(expr),
        source,
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// CompiledExpr
// ══════════════════════════════════════════════════════════════════════════════

/// A compiled expression: `Environment -> Value`.
///
/// Calling it has no side effects and is repeatable.
pub struct CompiledExpr {
    code: Code,
    /// Rendering of the expression this was compiled from.
    source: String,
}

impl CompiledExpr {
    /// Run the compiled code against `env`.
    pub fn call(&self, env: &Environment) -> EvalResult<Value> {
        (self.code)(env)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledExpr")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|env| {}", self.source)
    }
}
