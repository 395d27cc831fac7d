/// Core parsing entry point.
///
/// Contains the shared `ParseResult` type and the top-level expression
/// parsing function.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence ladder for binary operators: additive,
/// multiplicative, and exponentiation levels.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, literals, and parenthesized groupings.
pub mod unary;
