/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// text. Parse errors include unexpected tokens, unterminated groupings, and
/// any other issues detected before evaluation.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing an expression
/// tree, such as division by zero or an operator the evaluator does not
/// support.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
