//! # numera
//!
//! numera is a tiny arithmetic expression evaluator written in Rust.
//! It parses a textual expression such as `1 + 1` into a syntax tree and
//! reduces that tree to a single numeric value by recursive evaluation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::evaluate,
        lexer::{LexerExtras, Token},
        parser::core::parse_expression,
        value::Value,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an arithmetic expression as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node and operator types.
/// - Attaches source locations to AST nodes for error reporting.
/// - Enables explicit handling of unsupported nodes and operators.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including error kinds, descriptions,
/// and source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and error handling to provide a complete pipeline from
/// source text to numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for parsing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers and conversion routines that are
/// used throughout the parser and evaluator, including safe conversions
/// between integer and floating-point types.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Evaluates a source string and returns the resulting value.
///
/// This function lexes and parses the provided source string as a single
/// expression, reduces the resulting tree, and returns the computed value.
/// Leading and trailing newlines are tolerated; any other leftover input is
/// reported as trailing tokens.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails. Errors are
/// returned verbatim to the caller; no recovery is attempted.
///
/// # Examples
/// ```
/// use numera::{evaluate_source, interpreter::value::Value};
///
/// // Simple expression: literals combined with binary operators.
/// let result = evaluate_source("1 + 1").unwrap();
/// assert_eq!(result, Value::Integer(2));
///
/// // Division is true division, even for integer operands.
/// let result = evaluate_source("7 / 2").unwrap();
/// assert_eq!(result, Value::Real(3.5));
///
/// // Example with an intentional error (division by zero).
/// let result = evaluate_source("1 / 0");
/// assert!(result.is_err());
/// ```
pub fn evaluate_source(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string(),
                                                              line:  lexer.extras.line, }));
        }
    }

    let mut iter = tokens.iter().peekable();

    while let Some((Token::NewLine, _)) = iter.peek() {
        iter.next();
    }

    let expr = parse_expression(&mut iter)?;

    while let Some((Token::NewLine, _)) = iter.peek() {
        iter.next();
    }

    if let Some((tok, line)) = iter.peek() {
        return Err(Box::new(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                   line:  *line, }));
    }

    Ok(evaluate(&expr)?)
}
