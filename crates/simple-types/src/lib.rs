//! Shared types for SIMPLE.
//!
//! This crate defines the value model, the immutable environment, the
//! expression and statement AST, their textual rendering, and the runtime
//! error type used by every execution strategy.

mod display;
mod env;
mod error;
mod operators;
mod value;
pub mod ast;

pub use ast::{BinOp, Expr, Stmt};
pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use value::Value;
