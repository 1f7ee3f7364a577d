//! SIMPLE closure compiler: compiles an expression AST to a reusable callable.
//!
//! # Architecture
//!
//! [`compile`] walks the expression once and nests one closure per node,
//! mirroring the combination rules of big-step evaluation. The result is a
//! [`CompiledExpr`]; calling it only performs variable lookups and operator
//! application, never AST traversal.
//!
//! Statements are not compiled. Repeated statement execution goes through
//! `simple_eval::evaluate` or a reduction machine per invocation.

pub mod compiler;
pub mod expr;

pub use compiler::{compile, CompiledExpr};
