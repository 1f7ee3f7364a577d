//! Small-step reduction: rewrite a node one step closer to normal form.
//!
//! Operands reduce left to right. A node is in normal form when
//! [`Reduce::reducible`] is false: a literal for expressions, `do-nothing`
//! for statements. Reducing a normal form is a [`EvalError::ContractViolation`].

use simple_types::{BinOp, Environment, EvalError, EvalResult, Expr, Stmt, Value};
use std::fmt;

/// A node the reduction [`Machine`](crate::Machine) can drive.
///
/// Expressions never change the environment; their `reduce` hands the
/// environment back unchanged so both layers share one machine.
pub trait Reduce: Clone + fmt::Display {
    /// Whether at least one more reduction step exists.
    fn reducible(&self) -> bool;

    /// Perform one reduction step.
    fn reduce(&self, env: &Environment) -> EvalResult<(Self, Environment)>;
}

impl Reduce for Expr {
    fn reducible(&self) -> bool {
        match self {
            Expr::Number(_) | Expr::Boolean(_) => false,
            Expr::Variable(_) | Expr::Add(..) | Expr::Multiply(..) | Expr::LessThan(..) => true,
        }
    }

    fn reduce(&self, env: &Environment) -> EvalResult<(Self, Environment)> {
        reduce_expr(self, env).map(|expr| (expr, env.clone()))
    }
}

impl Reduce for Stmt {
    fn reducible(&self) -> bool {
        match self {
            Stmt::DoNothing => false,
            Stmt::Assign(..) | Stmt::If { .. } | Stmt::Sequence(..) | Stmt::While { .. } => true,
        }
    }

    fn reduce(&self, env: &Environment) -> EvalResult<(Self, Environment)> {
        reduce_stmt(self, env)
    }
}

fn already_normal(node: &impl fmt::Display) -> EvalError {
    EvalError::ContractViolation(format!("cannot reduce `{node}`: already in normal form"))
}

/// The value of an irreducible operand.
fn operand_value(expr: &Expr) -> EvalResult<Value> {
    expr.as_value().ok_or_else(|| {
        EvalError::ContractViolation(format!("`{expr}` is not a value"))
    })
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// Reduce an expression by one step.
pub fn reduce_expr(expr: &Expr, env: &Environment) -> EvalResult<Expr> {
    match expr {
        Expr::Number(_) | Expr::Boolean(_) => Err(already_normal(expr)),
        Expr::Variable(name) => env.lookup(name).map(Expr::from),
        Expr::Add(left, right) => reduce_binary(BinOp::Add, left, right, env),
        Expr::Multiply(left, right) => reduce_binary(BinOp::Multiply, left, right, env),
        Expr::LessThan(left, right) => reduce_binary(BinOp::LessThan, left, right, env),
    }
}

fn reduce_binary(op: BinOp, left: &Expr, right: &Expr, env: &Environment) -> EvalResult<Expr> {
    if left.reducible() {
        Ok(Expr::binary(op, reduce_expr(left, env)?, right.clone()))
    } else if right.reducible() {
        Ok(Expr::binary(op, left.clone(), reduce_expr(right, env)?))
    } else {
        op.apply(operand_value(left)?, operand_value(right)?)
            .map(Expr::from)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// Reduce a statement by one step, producing the next statement and environment.
pub fn reduce_stmt(stmt: &Stmt, env: &Environment) -> EvalResult<(Stmt, Environment)> {
    match stmt {
        Stmt::DoNothing => Err(already_normal(stmt)),

        Stmt::Assign(name, expr) => {
            if expr.reducible() {
                let expr = reduce_expr(expr, env)?;
                Ok((Stmt::Assign(name.clone(), expr), env.clone()))
            } else {
                let value = operand_value(expr)?;
                Ok((Stmt::DoNothing, env.extend(name.clone(), value)))
            }
        }

        Stmt::If {
            condition,
            consequence,
            alternative,
        } => {
            if condition.reducible() {
                let next = Stmt::If {
                    condition: reduce_expr(condition, env)?,
                    consequence: consequence.clone(),
                    alternative: alternative.clone(),
                };
                Ok((next, env.clone()))
            } else if operand_value(condition)?.expect_boolean()? {
                Ok(((**consequence).clone(), env.clone()))
            } else {
                Ok(((**alternative).clone(), env.clone()))
            }
        }

        Stmt::Sequence(first, second) => match &**first {
            Stmt::DoNothing => Ok(((**second).clone(), env.clone())),
            _ => {
                let (first, env) = reduce_stmt(first, env)?;
                Ok((Stmt::Sequence(Box::new(first), second.clone()), env))
            }
        },

        // One iteration unrolled per step; the loop itself is the tail.
        Stmt::While { condition, body } => {
            let unrolled = Stmt::if_else(
                condition.clone(),
                Stmt::sequence((**body).clone(), stmt.clone()),
                Stmt::DoNothing,
            );
            Ok((unrolled, env.clone()))
        }
    }
}
