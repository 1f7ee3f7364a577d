//! AST node types for the SIMPLE language.
//!
//! Two closed layers: [`Expr`] produces a [`Value`], [`Stmt`] produces an
//! [`Environment`](crate::Environment). Nodes are immutable trees; every
//! execution strategy builds new nodes instead of mutating existing ones.
//! Recursive children are boxed and owned by their parent.

use crate::value::Value;

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// A value-producing node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Number(i64),
    Boolean(bool),
    Variable(String),
    Add(Box<Expr>, Box<Expr>),
    Multiply(Box<Expr>, Box<Expr>),
    LessThan(Box<Expr>, Box<Expr>),
}

/// The binary operators, shared by every strategy's combination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Multiply,
    LessThan,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Multiply => "*",
            Self::LessThan => "<",
        }
    }

    /// Binding strength for rendering; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Self::LessThan => 1,
            Self::Add => 2,
            Self::Multiply => 3,
        }
    }
}

impl Expr {
    pub fn number(n: i64) -> Self {
        Self::Number(n)
    }

    pub fn boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Self::Add(Box::new(left), Box::new(right))
    }

    pub fn multiply(left: Expr, right: Expr) -> Self {
        Self::Multiply(Box::new(left), Box::new(right))
    }

    pub fn less_than(left: Expr, right: Expr) -> Self {
        Self::LessThan(Box::new(left), Box::new(right))
    }

    /// Build the binary node for `op`.
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        match op {
            BinOp::Add => Self::add(left, right),
            BinOp::Multiply => Self::multiply(left, right),
            BinOp::LessThan => Self::less_than(left, right),
        }
    }

    /// The operator and operands of a binary node.
    pub fn as_binary(&self) -> Option<(BinOp, &Expr, &Expr)> {
        match self {
            Self::Add(left, right) => Some((BinOp::Add, left, right)),
            Self::Multiply(left, right) => Some((BinOp::Multiply, left, right)),
            Self::LessThan(left, right) => Some((BinOp::LessThan, left, right)),
            Self::Number(_) | Self::Boolean(_) | Self::Variable(_) => None,
        }
    }

    /// The value carried by a literal node, `None` for anything else.
    pub fn as_value(&self) -> Option<Value> {
        match self {
            Self::Number(n) => Some(Value::Number(*n)),
            Self::Boolean(b) => Some(Value::Boolean(*b)),
            Self::Variable(_) | Self::Add(..) | Self::Multiply(..) | Self::LessThan(..) => None,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => Self::Number(n),
            Value::Boolean(b) => Self::Boolean(b),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// An environment-transforming node.
///
/// `DoNothing` carries no payload, so any two instances compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    DoNothing,
    Assign(String, Expr),
    If {
        condition: Expr,
        consequence: Box<Stmt>,
        alternative: Box<Stmt>,
    },
    Sequence(Box<Stmt>, Box<Stmt>),
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
}

impl Stmt {
    pub fn do_nothing() -> Self {
        Self::DoNothing
    }

    pub fn assign(name: impl Into<String>, expr: Expr) -> Self {
        Self::Assign(name.into(), expr)
    }

    pub fn if_else(condition: Expr, consequence: Stmt, alternative: Stmt) -> Self {
        Self::If {
            condition,
            consequence: Box::new(consequence),
            alternative: Box::new(alternative),
        }
    }

    pub fn sequence(first: Stmt, second: Stmt) -> Self {
        Self::Sequence(Box::new(first), Box::new(second))
    }

    pub fn while_loop(condition: Expr, body: Stmt) -> Self {
        Self::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn is_do_nothing(&self) -> bool {
        matches!(self, Self::DoNothing)
    }
}
