use crate::{
    ast::LiteralValue,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value produced by evaluation.
///
/// Equality is structural: `Integer(3)` and `Real(3.0)` are distinct values.
/// Promotion from integer to real happens only where an operation requires it
/// (mixed-type arithmetic and true division).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// An integer value (64 bit integer).
    Integer(i64),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(v: LiteralValue) -> Self {
        match v {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is real or a safe integer.
    /// - `Err(EvalError::LiteralTooLarge)`: If the integer is not exactly
    ///   representable.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(42).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, EvalError::LiteralTooLarge { line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}
