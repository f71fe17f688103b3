/// Core evaluation logic for expressions and statements.
///
/// Contains the evaluation context, the dispatch over AST variants and the
/// transactional execution of programs.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the prefix sign operators.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic for `+ - * /`.
pub mod binary;
