/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, dispatching on the node variant: expressions
/// reduce to integers, statements update the variable scope.
///
/// # Responsibilities
/// - Evaluates expressions with checked integer arithmetic.
/// - Executes assignments and blocks against the scope.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one line of raw source text and produces tokens on demand,
/// each corresponding to a number, identifier, keyword, operator or
/// punctuation mark.
///
/// # Responsibilities
/// - Converts the input characters into tokens with kind, value and position.
/// - Folds reserved words into keyword tokens.
/// - Reports lexical errors for invalid characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer one at a time and applies a
/// recursive-descent grammar that encodes operator precedence and
/// associativity.
///
/// # Responsibilities
/// - Converts tokens into expression and statement nodes.
/// - Validates the grammar, reporting the expected and found token.
/// - Distinguishes bare expressions from `BEGIN ... END.` programs.
pub mod parser;
/// The variable scope shared by every line of a session.
pub mod scope;
