/// Represents a literal value in an expression.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source text. It is used in the AST to represent literal expressions and is
/// converted into a runtime [`Value`](crate::interpreter::value::Value)
/// unchanged during evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is finite, acyclic and rooted; every node carries the source line
/// it was parsed from for error reporting. Trees are immutable once built:
/// the parser produces them and the evaluator only reads them.
///
/// Note that the parser recognizes a wider surface than the evaluator
/// reduces. Nodes and operators outside the evaluated subset still parse, and
/// evaluating them reports an unknown-node or unknown-operator error instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (integer or real).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use numera::ast::Expr;
    ///
    /// let expr = Expr::Literal { value: 3.into(),
    ///                            line:  5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. } | Self::UnaryOp { line, .. } | Self::BinaryOp { line, .. } => {
                *line
            },
        }
    }
}

/// Represents a binary operator.
///
/// `Add`, `Sub`, `Mul` and `Div` are reduced by the evaluator. `Mod` and
/// `Pow` are recognized by the lexer and parser but have no evaluation rule;
/// they exercise the unknown-operator error path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}