/// The evaluator module reduces AST nodes to values.
///
/// The evaluator walks the expression tree recursively and computes a single
/// numeric result. It is the core execution engine of the crate.
///
/// # Responsibilities
/// - Reduces literal and binary-operation nodes to values.
/// - Performs integer and real arithmetic with promotion.
/// - Reports evaluation errors such as division by zero or an unsupported
///   operator or node.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful elements such as numbers,
/// operators, and delimiters. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles integer and real literals, operators, and comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the expression. This
/// enables the evaluator to reduce user input to a value.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Applies the conventional operator precedence and associativity rules.
/// - Validates correct syntax, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types produced by evaluation: integers and
/// reals. It also provides methods for safe promotion between numeric types.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Implements conversion and promotion between integer and real values.
/// - Provides a display implementation for printing results.
pub mod value;
