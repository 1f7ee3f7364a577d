//! Deterministic textual rendering of AST nodes.
//!
//! Binary operators render infix with the fewest parentheses that keep the
//! tree unambiguous: `*` binds tighter than `+`, which binds tighter than `<`,
//! and a right operand of equal precedence is parenthesised.

use crate::ast::{BinOp, Expr, Stmt};
use std::fmt;

/// Precedence of atoms (literals and variables).
const ATOM_PRECEDENCE: u8 = u8::MAX;

fn precedence(expr: &Expr) -> u8 {
    expr.as_binary()
        .map_or(ATOM_PRECEDENCE, |(op, _, _)| op.precedence())
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, bracket: bool) -> fmt::Result {
    if bracket {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

fn write_binary(f: &mut fmt::Formatter<'_>, op: BinOp, left: &Expr, right: &Expr) -> fmt::Result {
    let outer = op.precedence();
    write_operand(f, left, precedence(left) < outer)?;
    write!(f, " {} ", op.symbol())?;
    write_operand(f, right, precedence(right) <= outer)
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Variable(name) => f.write_str(name),
            Self::Add(left, right) => write_binary(f, BinOp::Add, left, right),
            Self::Multiply(left, right) => write_binary(f, BinOp::Multiply, left, right),
            Self::LessThan(left, right) => write_binary(f, BinOp::LessThan, left, right),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoNothing => f.write_str("do-nothing"),
            Self::Assign(name, expr) => write!(f, "{name} = {expr}"),
            Self::If {
                condition,
                consequence,
                alternative,
            } => write!(
                f,
                "if ({condition}) {{ {consequence} }} else {{ {alternative} }}"
            ),
            Self::Sequence(first, second) => write!(f, "{first}; {second}"),
            Self::While { condition, body } => write!(f, "while ({condition}) {{ {body} }}"),
        }
    }
}
