use numera::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    evaluate_source,
    interpreter::{evaluator::core::evaluate, value::Value},
};

fn assert_value(src: &str, expected: Value) {
    match evaluate_source(src) {
        Ok(value) => assert_eq!(value, expected, "Wrong result for: {src}"),
        Err(e) => panic!("Expression failed: {src}\nError: {e}"),
    }
}

fn assert_failure(src: &str) {
    if evaluate_source(src).is_ok() {
        panic!("Expression succeeded but was expected to fail: {src}")
    }
}

fn literal(value: i64, line: usize) -> Expr {
    Expr::Literal { value: value.into(),
                    line }
}

fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_value("42", Value::Integer(42));
    assert_value("0", Value::Integer(0));
    assert_value("3.5", Value::Real(3.5));
    assert_value(".25", Value::Real(0.25));
    assert_value("2e3", Value::Real(2000.0));
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", Value::Integer(3));
    assert_value("8 - 5", Value::Integer(3));
    assert_value("7 * 9", Value::Integer(63));
    assert_value("1.5 + 2.25", Value::Real(3.75));
    assert_value("0.5 * 4.0", Value::Real(2.0));
}

#[test]
fn mixed_operands_promote_to_real() {
    assert_value("1 + 2.5", Value::Real(3.5));
    assert_value("2.5 - 1", Value::Real(1.5));
    assert_value("3 * 0.5", Value::Real(1.5));
}

#[test]
fn division_is_true_division() {
    assert_value("10 / 2", Value::Real(5.0));
    assert_value("7 / 2", Value::Real(3.5));
    assert_value("1 / 4", Value::Real(0.25));
    assert_value("1.0 / 8", Value::Real(0.125));
}

#[test]
fn nested_trees_reduce_left_to_right() {
    assert_value("2 * 3 + 1", Value::Integer(7));
    assert_value("1 + 2 * 3", Value::Integer(7));
    assert_value("(1 + 2) * 3", Value::Integer(9));
    assert_value("10 - 3 - 2", Value::Integer(5));
    assert_value("100 / 10 / 5", Value::Real(2.0));
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_value("// a comment\n1 + 1", Value::Integer(2));
    assert_value("/* spanning\ntwo lines */ 2 * 2", Value::Integer(4));
    assert_value("\n\n  4 - 1  \n", Value::Integer(3));
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("1 / 0");
    assert_failure("1.0 / 0.0");
    assert_failure("3 / (2 - 2)");

    let expr = binary(BinaryOperator::Div, literal(1, 1), literal(0, 1));
    assert!(matches!(evaluate(&expr), Err(EvalError::DivisionByZero { line: 1 })));
}

#[test]
fn unsupported_operator_is_unknown_operator() {
    assert_failure("2 ^ 3");
    assert_failure("5 % 2");

    let expr = binary(BinaryOperator::Pow, literal(2, 1), literal(3, 1));
    match evaluate(&expr) {
        Err(EvalError::UnknownOperator { op, line: 1 }) => assert_eq!(op, "^"),
        other => panic!("Expected UnknownOperator, got {other:?}"),
    }
}

#[test]
fn unsupported_node_is_unknown_node() {
    assert_failure("-3");
    assert_failure("1 + -3");

    let expr = Expr::UnaryOp { op:   UnaryOperator::Negate,
                               expr: Box::new(literal(3, 1)),
                               line: 1, };
    assert!(matches!(evaluate(&expr), Err(EvalError::UnknownNode { line: 1, .. })));
}

#[test]
fn left_operand_fails_before_right() {
    // Both operands fail; the reported error must come from the left one.
    let left = binary(BinaryOperator::Div, literal(1, 1), literal(0, 1));
    let right = binary(BinaryOperator::Pow, literal(2, 1), literal(3, 1));
    let expr = binary(BinaryOperator::Add, left, right);

    assert!(matches!(evaluate(&expr), Err(EvalError::DivisionByZero { .. })));
}

#[test]
fn evaluation_is_idempotent() {
    let expr = binary(BinaryOperator::Add,
                      binary(BinaryOperator::Mul, literal(2, 1), literal(3, 1)),
                      literal(1, 1));

    let first = evaluate(&expr).unwrap();
    let second = evaluate(&expr).unwrap();

    assert_eq!(first, Value::Integer(7));
    assert_eq!(first, second);
}

#[test]
fn parse_errors_are_reported() {
    assert_failure("");
    assert_failure("1 +");
    assert_failure("(1 + 2");
    assert_failure("1 2");
    assert_failure("1 + + 2");
    assert_failure("$");
}

#[test]
fn oversized_integer_literal_is_error() {
    assert_failure("99999999999999999999");
}

#[test]
fn error_messages_carry_the_line_number() {
    let err = evaluate_source("1 / 0").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Division by zero.");

    let err = evaluate_source("/* one\ntwo */ 1 / 0").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 2: Division by zero.");

    let err = evaluate_source("2 ^ 3").unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Unknown operator '^'.");
}
