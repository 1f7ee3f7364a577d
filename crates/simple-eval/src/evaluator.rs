//! Big-step evaluation: compute a value or environment directly.

use simple_types::{BinOp, Environment, EvalError, EvalResult, Expr, Stmt, Value};

/// Walks AST nodes by structural recursion, without rewriting them.
///
/// Gas metering is optional: each evaluated node consumes one unit, and
/// exceeding the limit fails with [`EvalError::GasExhausted`]. An unmetered
/// evaluator runs a non-terminating loop forever.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    /// Gas consumed so far.
    gas: u64,
    /// Gas limit, `None` when unmetered.
    gas_limit: Option<u64>,
}

impl Evaluator {
    /// Create an unmetered evaluator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator that fails once `limit` nodes have been evaluated.
    pub fn with_gas_limit(limit: u64) -> Self {
        Self {
            gas: 0,
            gas_limit: Some(limit),
        }
    }

    pub fn gas_used(&self) -> u64 {
        self.gas
    }

    /// Consume one unit of gas. Returns error if exhausted.
    fn tick(&mut self) -> EvalResult<()> {
        self.gas += 1;
        match self.gas_limit {
            Some(limit) if self.gas > limit => {
                tracing::warn!(limit, "evaluation gas exhausted");
                Err(EvalError::GasExhausted(limit))
            }
            _ => Ok(()),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expression evaluation
    // ══════════════════════════════════════════════════════════════════════

    /// Evaluate an expression to a Value.
    pub fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        self.tick()?;
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Boolean(b) => Ok(Value::Boolean(*b)),
            Expr::Variable(name) => env.lookup(name),
            Expr::Add(left, right) => self.eval_binary(BinOp::Add, left, right, env),
            Expr::Multiply(left, right) => self.eval_binary(BinOp::Multiply, left, right, env),
            Expr::LessThan(left, right) => self.eval_binary(BinOp::LessThan, left, right, env),
        }
    }

    fn eval_binary(
        &mut self,
        op: BinOp,
        left: &Expr,
        right: &Expr,
        env: &Environment,
    ) -> EvalResult<Value> {
        let lv = self.eval_expr(left, env)?;
        let rv = self.eval_expr(right, env)?;
        op.apply(lv, rv)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Statement evaluation
    // ══════════════════════════════════════════════════════════════════════

    /// Execute a statement, returning the resulting environment.
    pub fn eval_stmt(&mut self, stmt: &Stmt, env: &Environment) -> EvalResult<Environment> {
        self.tick()?;
        match stmt {
            Stmt::DoNothing => Ok(env.clone()),
            Stmt::Assign(name, expr) => {
                let value = self.eval_expr(expr, env)?;
                Ok(env.extend(name.clone(), value))
            }
            Stmt::If {
                condition,
                consequence,
                alternative,
            } => {
                if self.eval_expr(condition, env)?.expect_boolean()? {
                    self.eval_stmt(consequence, env)
                } else {
                    self.eval_stmt(alternative, env)
                }
            }
            Stmt::Sequence(first, second) => {
                let env = self.eval_stmt(first, env)?;
                self.eval_stmt(second, &env)
            }
            Stmt::While { condition, body } => self.eval_while(condition, body, env),
        }
    }

    /// Iterates in place so the call stack stays flat however long the loop runs.
    fn eval_while(
        &mut self,
        condition: &Expr,
        body: &Stmt,
        env: &Environment,
    ) -> EvalResult<Environment> {
        let mut env = env.clone();
        while self.eval_expr(condition, &env)?.expect_boolean()? {
            env = self.eval_stmt(body, &env)?;
        }
        Ok(env)
    }
}

/// A node with a big-step meaning.
pub trait Evaluate {
    /// [`Value`] for expressions, [`Environment`] for statements.
    type Output;

    fn evaluate(&self, env: &Environment) -> EvalResult<Self::Output>;
}

impl Evaluate for Expr {
    type Output = Value;

    fn evaluate(&self, env: &Environment) -> EvalResult<Value> {
        Evaluator::new().eval_expr(self, env)
    }
}

impl Evaluate for Stmt {
    type Output = Environment;

    fn evaluate(&self, env: &Environment) -> EvalResult<Environment> {
        Evaluator::new().eval_stmt(self, env)
    }
}

/// Evaluate `node` against `env` with an unmetered evaluator.
pub fn evaluate<N: Evaluate + ?Sized>(node: &N, env: &Environment) -> EvalResult<N::Output> {
    node.evaluate(env)
}
