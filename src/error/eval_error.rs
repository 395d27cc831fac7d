#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// Encountered an operator the evaluator has no rule for.
    UnknownOperator {
        /// The rendering of the offending operator.
        op:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Encountered a tree node the evaluator has no rule for.
    UnknownNode {
        /// The rendering of the offending node.
        node: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer value was too large to be represented safely as a real.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator { op, line } => {
                write!(f, "Error on line {line}: Unknown operator '{op}'.")
            },
            Self::UnknownNode { node, line } => {
                write!(f, "Error on line {line}: Unknown node: {node}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
