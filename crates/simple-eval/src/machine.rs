//! The reduction machine: drives small-step reduction to a normal form.

use crate::reduce::Reduce;
use simple_types::{Environment, EvalError, EvalResult};
use std::fmt;

/// A (node, environment) pair visited during reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State<N> {
    pub node: N,
    pub env: Environment,
}

impl<N> State<N> {
    pub fn new(node: N, env: Environment) -> Self {
        Self { node, env }
    }
}

/// Renders as `node, env`, e.g. `x = x + 1, {x: 1}`.
impl<N: fmt::Display> fmt::Display for State<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.node, self.env)
    }
}

/// Owns the current (node, environment) pair and advances it one
/// [`Reduce::reduce`] at a time.
///
/// Works for statements and, as a degenerate case, for expressions, whose
/// environment is carried through unchanged. `run` does not return for a
/// diverging program unless a gas limit is set.
#[derive(Debug, Clone)]
pub struct Machine<N> {
    state: State<N>,
    /// Steps taken so far.
    steps: u64,
    /// Maximum number of steps, `None` when unbounded.
    gas_limit: Option<u64>,
}

impl<N: Reduce> Machine<N> {
    pub fn new(node: N, env: Environment) -> Self {
        Self {
            state: State::new(node, env),
            steps: 0,
            gas_limit: None,
        }
    }

    /// Fail with [`EvalError::GasExhausted`] instead of taking more than `limit` steps.
    pub fn with_gas_limit(mut self, limit: u64) -> Self {
        self.gas_limit = Some(limit);
        self
    }

    pub fn state(&self) -> &State<N> {
        &self.state
    }

    pub fn node(&self) -> &N {
        &self.state.node
    }

    pub fn env(&self) -> &Environment {
        &self.state.env
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn into_state(self) -> State<N> {
        self.state
    }

    pub fn is_normal_form(&self) -> bool {
        !self.state.node.reducible()
    }

    /// Replace the current pair with the result of one reduction.
    ///
    /// Stepping a normal form is a contract violation.
    pub fn step(&mut self) -> EvalResult<()> {
        if let Some(limit) = self.gas_limit {
            if self.steps >= limit {
                return Err(EvalError::GasExhausted(limit));
            }
        }
        let (node, env) = self.state.node.reduce(&self.state.env)?;
        self.state = State::new(node, env);
        self.steps += 1;
        tracing::trace!(step = self.steps, state = %self.state, "reduced");
        Ok(())
    }

    /// Step until the node is irreducible and return the final pair.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self) -> EvalResult<&State<N>> {
        while self.state.node.reducible() {
            self.step()?;
        }
        tracing::debug!(steps = self.steps, "reached normal form");
        Ok(&self.state)
    }

    /// The states reduction visits from the current pair, without advancing this machine.
    pub fn trace(&self) -> Trace<N> {
        Trace {
            start: self.state.clone(),
            gas_limit: self.gas_limit,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Trace
// ══════════════════════════════════════════════════════════════════════════════

/// The sequence of states from a starting pair to its normal form,
/// including both ends.
///
/// Lazy: each [`Trace::iter`] runs a fresh machine from the start, so the
/// trace can be walked any number of times. Rendering is left to callers.
#[derive(Debug, Clone)]
pub struct Trace<N> {
    start: State<N>,
    gas_limit: Option<u64>,
}

impl<N: Reduce> Trace<N> {
    pub fn iter(&self) -> TraceIter<N> {
        let mut machine = Machine::new(self.start.node.clone(), self.start.env.clone());
        machine.gas_limit = self.gas_limit;
        TraceIter {
            machine: Some(machine),
            started: false,
        }
    }

    /// Collect every state, failing with the first reduction error.
    pub fn states(&self) -> EvalResult<Vec<State<N>>> {
        self.iter().collect()
    }
}

impl<'a, N: Reduce> IntoIterator for &'a Trace<N> {
    type Item = EvalResult<State<N>>;
    type IntoIter = TraceIter<N>;

    fn into_iter(self) -> TraceIter<N> {
        self.iter()
    }
}

/// Iterator over a [`Trace`]. Yields at most one error, then ends.
#[derive(Debug)]
pub struct TraceIter<N> {
    machine: Option<Machine<N>>,
    started: bool,
}

impl<N: Reduce> Iterator for TraceIter<N> {
    type Item = EvalResult<State<N>>;

    fn next(&mut self) -> Option<Self::Item> {
        let machine = self.machine.as_mut()?;
        if !self.started {
            self.started = true;
            return Some(Ok(machine.state.clone()));
        }
        if machine.is_normal_form() {
            self.machine = None;
            return None;
        }
        match machine.step() {
            Ok(()) => Some(Ok(machine.state.clone())),
            Err(err) => {
                self.machine = None;
                Some(Err(err))
            }
        }
    }
}
