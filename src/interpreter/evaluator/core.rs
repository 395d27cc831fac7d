use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{evaluator::binary::eval_binary, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// This is the main entry point for evaluation: a pure, single-pass
/// recursive walk over the tree. Literals are returned unchanged and binary
/// operations evaluate their left operand, then their right operand, then
/// apply the operator. No state is read or written, so evaluating the same
/// tree repeatedly always yields the same result.
///
/// Any node other than a literal or a binary operation has no evaluation
/// rule and is reported as an unknown node. Recursion depth is bounded by
/// the depth of the input tree.
///
/// # Parameters
/// - `expr`: Expression tree to reduce.
///
/// # Returns
/// The computed [`Value`].
///
/// # Errors
/// - `EvalError::UnknownNode` for a node the evaluator has no rule for.
/// - `EvalError::UnknownOperator` for an operator outside `+`, `-`, `*`, `/`.
/// - `EvalError::DivisionByZero` when a divisor evaluates to zero.
/// - `EvalError::LiteralTooLarge` when an integer cannot be promoted to a
///   real exactly.
///
/// # Example
/// ```
/// use numera::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{evaluator::core::evaluate, value::Value},
/// };
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 3.into(),
///                                                             line:  1, }),
///                             op:    BinaryOperator::Add,
///                             right: Box::new(Expr::Literal { value: 4.into(),
///                                                             line:  1, }),
///                             line:  1, };
///
/// assert_eq!(evaluate(&expr).unwrap(), Value::Integer(7));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(Value::from(*value)),
        Expr::BinaryOp { left, op, right, line } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, &left, &right, *line)
        },
        other => Err(EvalError::UnknownNode { node: format!("{other:?}"),
                                              line: other.line_number(), }),
    }
}
