//! # spi
//!
//! spi is an interactive evaluator for a small Pascal-flavoured language.
//! It evaluates integer arithmetic with `+ - * /`, parentheses and sign
//! operators, and `BEGIN ... END.` programs of assignments over variables
//! that persist for the whole session.

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

use crate::{
    error::ParseError,
    interpreter::lexer::{ReservedWords, Token},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a line as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source positions to nodes that can fail at run time.
/// - Renders trees back to text with their grouping made explicit.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating a line, each carrying the source position of the failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the lex, parse and evaluate pipeline.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and variable scope.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The session boundary used by interactive front ends.
pub mod session;

pub use session::Session;

/// Evaluates `source` line by line in a fresh session.
///
/// Returns the value of the last bare expression, if any. Evaluation stops at
/// the first failing line.
///
/// # Errors
/// Returns the error of the first line that fails to lex, parse or evaluate.
///
/// # Examples
/// ```
/// use spi::evaluate;
///
/// let source = "BEGIN x := 10 END.\nx / 3";
/// assert_eq!(evaluate(source).unwrap(), Some(3));
///
/// // Example with an intentional error (unknown variable).
/// assert!(evaluate("y + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Option<i64>, Box<dyn std::error::Error>> {
    let mut session = Session::new();
    let mut result = None;

    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        if let Some(value) = session.evaluate_line(line)? {
            result = Some(value);
        }
    }

    Ok(result)
}

/// Tokenizes one line with the default reserved words.
///
/// # Errors
/// Returns the first lexical error in `source`.
///
/// # Examples
/// ```
/// use spi::tokenize;
///
/// let tokens = tokenize("begin").unwrap();
/// assert_eq!(tokens[0].to_string(), "Token(BEGIN, begin)");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    interpreter::lexer::tokenize(source, &ReservedWords::default())
}
