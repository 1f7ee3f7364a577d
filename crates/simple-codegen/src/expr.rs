//! Expression code generation.
//!
//! Every expression compiles to a [`Code`] closure from environment to
//! value. Sub-expressions are compiled once, up front; variable lookup is
//! the only work deferred to call time.

use simple_types::{BinOp, Environment, EvalResult, Expr, Value};

/// A compiled expression body.
pub type Code = Box<dyn Fn(&Environment) -> EvalResult<Value> + Send + Sync>;

/// Compile an expression and all of its operands.
pub fn emit_expr(expr: &Expr) -> Code {
    match expr {
        // ── Literals ──────────────────────────────────────────────────────
        Expr::Number(n) => emit_constant(Value::Number(*n)),
        Expr::Boolean(b) => emit_constant(Value::Boolean(*b)),

        // ── Identifiers ──────────────────────────────────────────────────
        Expr::Variable(name) => emit_variable(name),

        // ── Operators ────────────────────────────────────────────────────
        Expr::Add(left, right) => emit_binary(BinOp::Add, left, right),
        Expr::Multiply(left, right) => emit_binary(BinOp::Multiply, left, right),
        Expr::LessThan(left, right) => emit_binary(BinOp::LessThan, left, right),
    }
}

fn emit_constant(value: Value) -> Code {
    Box::new(move |_env: &Environment| Ok(value))
}

fn emit_variable(name: &str) -> Code {
    let name = name.to_string();
    Box::new(move |env: &Environment| env.lookup(&name))
}

/// Left operand runs first, matching evaluation order.
fn emit_binary(op: BinOp, left: &Expr, right: &Expr) -> Code {
    let left = emit_expr(left);
    let right = emit_expr(right);
    Box::new(move |env: &Environment| {
        let lv = left(env)?;
        let rv = right(env)?;
        op.apply(lv, rv)
    })
}
