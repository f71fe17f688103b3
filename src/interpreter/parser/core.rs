use log::debug;

use crate::{
    ast::Ast,
    error::ParseError,
    interpreter::lexer::{Lexer, ReservedWords, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many groupings, sign operators and blocks may be open at once.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The tallest expression tree a line may build, counting every operator on
/// the path from the root to a leaf.
pub const MAX_EXPRESSION_DEPTH: usize = 1024;

/// A recursive-descent parser over a pull-based token stream.
///
/// The parser holds exactly one token of lookahead, the current token, and
/// asks the lexer for the next one whenever it consumes it. Recursive rules
/// are counted in `depth` and fail once `MAX_NESTING_DEPTH` is reached.
pub struct Parser<'a> {
    lexer:   Lexer<'a>,
    current: Token,
    depth:   usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser and reads the first token from `lexer`.
    ///
    /// # Errors
    /// Propagates a lexical error in the first token.
    pub fn new(mut lexer: Lexer<'a>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  depth: 0 })
    }

    /// The token currently under the cursor.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Consumes the current token if it is of kind `expected`.
    ///
    /// On success the consumed token is returned and the next one becomes
    /// current. This is the single point where syntax errors are detected.
    ///
    /// # Errors
    /// - `InvalidSyntax` when the current token is of another kind.
    /// - Any lexical error raised while reading the next token.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: TokenKind) -> ParseResult<Token> {
        if self.current.kind != expected {
            return Err(ParseError::InvalidSyntax { expected,
                                                   found: self.current.clone() });
        }
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Builds a syntax error for the current token.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: TokenKind) -> ParseError {
        ParseError::InvalidSyntax { expected,
                                    found: self.current.clone() }
    }

    /// Opens one level of nesting before a recursive rule descends.
    ///
    /// # Errors
    /// `NestingTooDeep` at the current token once `MAX_NESTING_DEPTH` levels
    /// are open.
    pub(in crate::interpreter::parser) fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { position: self.current.position });
        }
        self.depth += 1;
        Ok(())
    }

    /// Closes the level opened by the matching `enter`.
    pub(in crate::interpreter::parser) const fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Rejects a freshly built node whose tree is taller than
    /// `MAX_EXPRESSION_DEPTH`.
    pub(in crate::interpreter::parser) const fn check_depth(depth: usize,
                                                            position: usize)
                                                            -> ParseResult<()> {
        if depth > MAX_EXPRESSION_DEPTH {
            return Err(ParseError::NestingTooDeep { position });
        }
        Ok(())
    }

    /// Parses the whole token stream into one AST root.
    ///
    /// A line starting with `BEGIN` is parsed as a program and must end with
    /// `.`; any other line is parsed as a bare expression. Either way the
    /// entire input has to be consumed.
    ///
    /// Grammar: `line := program EOF | expr EOF`
    ///
    /// # Errors
    /// Returns the first lexical or syntax error encountered.
    pub fn parse(&mut self) -> ParseResult<Ast> {
        let ast = if self.current.kind == TokenKind::Begin {
            Ast::Program(self.parse_program()?)
        } else {
            Ast::Expression(self.parse_expr()?)
        };
        self.eat(TokenKind::Eof)?;

        debug!("parsed {ast}");
        Ok(ast)
    }
}

/// Lexes and parses one line of source text.
///
/// # Errors
/// Returns the first lexical or syntax error encountered.
///
/// # Example
/// ```
/// use spi::interpreter::{lexer::ReservedWords, parser::core::parse_source};
///
/// let ast = parse_source("1 - 2 - 3", &ReservedWords::default()).unwrap();
/// assert_eq!(ast.to_string(), "((1 - 2) - 3)");
/// ```
pub fn parse_source(source: &str, reserved: &ReservedWords) -> ParseResult<Ast> {
    Parser::new(Lexer::new(source, reserved))?.parse()
}
