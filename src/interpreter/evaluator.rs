/// Core evaluation logic.
///
/// Contains the recursive tree walk that reduces an expression node to a
/// value, and the shared `EvalResult` type.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles the execution of the supported binary operations: addition,
/// subtraction, multiplication, and true division.
pub mod binary;
