/// Core parser state and the entry point for parsing a line.
///
/// Holds the lexer and the single token of lookahead, and implements `eat`,
/// the only primitive that consumes tokens.
pub mod core;

/// Binary expression parsing.
///
/// Implements the left-associative `+ -` and `* /` precedence tiers.
pub mod binary;

/// Unary expression and primary parsing.
///
/// Handles prefix sign operators, integer literals, parenthesized
/// expressions and variable references.
pub mod unary;

/// Statement parsing.
///
/// Implements the program shell: `BEGIN ... END.` blocks, statement lists,
/// assignments and the empty statement.
pub mod statement;
