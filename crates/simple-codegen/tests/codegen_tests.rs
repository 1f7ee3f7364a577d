//! Integration tests for the closure compiler.
//!
//! Tests validate:
//! - constants, variables and operators compile to the right callable
//! - one compiled expression runs against many environments
//! - errors surface at call time, not compile time
//! - compiled code keeps the source rendering

use pretty_assertions::assert_eq;
use simple_codegen::compile;
use simple_types::{Environment, EvalError, Expr, Value};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn n(v: i64) -> Expr {
    Expr::number(v)
}

fn var(name: &str) -> Expr {
    Expr::variable(name)
}

fn env(bindings: &[(&str, Value)]) -> Environment {
    bindings.iter().map(|(k, v)| (*k, *v)).collect()
}

// ══════════════════════════════════════════════════════════════════════════════
// Compilation
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn constants_ignore_environment() {
    let five = compile(&n(5));
    assert_eq!(five.call(&Environment::new()), Ok(Value::Number(5)));
    assert_eq!(five.call(&env(&[("x", Value::Number(1))])), Ok(Value::Number(5)));

    let no = compile(&Expr::boolean(false));
    assert_eq!(no.call(&Environment::new()), Ok(Value::Boolean(false)));
}

#[test]
fn variable_lookup_happens_at_call_time() {
    let x = compile(&var("x"));
    assert_eq!(x.call(&env(&[("x", Value::Number(7))])), Ok(Value::Number(7)));
    assert_eq!(x.call(&env(&[("x", Value::Boolean(true))])), Ok(Value::Boolean(true)));
}

#[test]
fn compiled_addition() {
    let code = compile(&Expr::add(var("x"), n(1)));
    assert_eq!(code.call(&env(&[("x", Value::Number(3))])), Ok(Value::Number(4)));
}

#[test]
fn compiled_comparison() {
    let code = compile(&Expr::less_than(Expr::add(var("x"), n(1)), n(3)));
    assert_eq!(code.call(&env(&[("x", Value::Number(3))])), Ok(Value::Boolean(false)));
    assert_eq!(code.call(&env(&[("x", Value::Number(1))])), Ok(Value::Boolean(true)));
}

#[test]
fn compile_once_invoke_many() {
    let code = compile(&Expr::multiply(var("x"), var("x")));
    for i in -10..=10 {
        assert_eq!(
            code.call(&env(&[("x", Value::Number(i))])),
            Ok(Value::Number(i * i)),
            "square of {i}"
        );
    }
}

#[test]
fn repeated_calls_are_stable() {
    let code = compile(&Expr::add(Expr::multiply(n(1), n(2)), Expr::multiply(n(3), n(4))));
    let e = Environment::new();
    let first = code.call(&e);
    for i in 0..100 {
        assert_eq!(first, code.call(&e), "Determinism failure at iteration {i}");
    }
    assert_eq!(first, Ok(Value::Number(14)));
}

// ══════════════════════════════════════════════════════════════════════════════
// Errors
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn unbound_variable_fails_at_call_time() {
    let code = compile(&Expr::add(var("y"), n(1)));
    assert_eq!(
        code.call(&env(&[("x", Value::Number(1))])),
        Err(EvalError::UnboundVariable("y".into()))
    );
    assert_eq!(code.call(&env(&[("y", Value::Number(1))])), Ok(Value::Number(2)));
}

#[test]
fn type_mismatch_fails_at_call_time() {
    let code = compile(&Expr::multiply(var("flag"), n(2)));
    assert_eq!(
        code.call(&env(&[("flag", Value::Boolean(true))])),
        Err(EvalError::TypeMismatch(
            "cannot apply '*' to boolean and number".into()
        ))
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// Source
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn compiled_code_keeps_source() {
    let code = compile(&Expr::multiply(Expr::add(var("x"), n(1)), n(2)));
    assert_eq!(code.source(), "(x + 1) * 2");
    assert_eq!(code.to_string(), "|env| (x + 1) * 2");
    assert!(format!("{code:?}").contains("(x + 1) * 2"));
}
