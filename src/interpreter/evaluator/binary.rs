use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary operation between two values.
///
/// Addition, subtraction and multiplication stay in integer arithmetic when
/// both operands are integers, and promote to real arithmetic otherwise.
/// Division is always true division: both operands are promoted to real and
/// the result is `Real` even for integer operands, so `7 / 2` yields `3.5`.
/// A zero divisor is rejected before dividing.
///
/// Operators without an evaluation rule (`%`, `^`) are reported as unknown,
/// carrying the operator's rendering.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use numera::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let left = Value::Integer(1);
/// let right = Value::Integer(2);
/// let line = 1;
///
/// let result = eval_binary(BinaryOperator::Div, &left, &right, line);
/// assert_eq!(result.unwrap(), Value::Real(0.5));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Value::{Integer, Real};

    match op {
        Add | Sub | Mul => match (left, right) {
            (Integer(a), Integer(b)) => Ok(Integer(match op {
                                                       Add => a + b,
                                                       Sub => a - b,
                                                       Mul => a * b,
                                                       _ => unreachable!(),
                                                   })),
            _ => {
                let l = left.as_real(line)?;
                let r = right.as_real(line)?;

                Ok(Real(match op {
                            Add => l + r,
                            Sub => l - r,
                            Mul => l * r,
                            _ => unreachable!(),
                        }))
            },
        },

        Div => {
            let divisor = right.as_real(line)?;
            if divisor == 0.0 {
                return Err(EvalError::DivisionByZero { line });
            }
            Ok(Real(left.as_real(line)? / divisor))
        },

        other => Err(EvalError::UnknownOperator { op:   other.to_string(),
                                                  line, }),
    }
}
