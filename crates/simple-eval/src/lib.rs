//! SIMPLE evaluator: small-step and big-step semantics.
//!
//! [`Reduce`] rewrites a node one step at a time and [`Machine`] drives it to
//! a normal form, optionally exposing the visited states as a [`Trace`].
//! [`Evaluator`] computes the same results directly by structural recursion.
//! For any node and environment both agree.

pub mod evaluator;
pub mod machine;
pub mod reduce;

pub use evaluator::{evaluate, Evaluate, Evaluator};
pub use machine::{Machine, State, Trace, TraceIter};
pub use reduce::{reduce_expr, reduce_stmt, Reduce};
