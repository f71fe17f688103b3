use crate::interpreter::lexer::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer found a character that starts no token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the line.
        position:  usize,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal in the line.
        position: usize,
    },
    /// The current token does not match what the grammar expects.
    InvalidSyntax {
        /// The kind the parser was about to consume.
        expected: TokenKind,
        /// The token actually found.
        found:    Token,
    },
    /// Groupings, sign runs or blocks nest deeper than the parser allows, or
    /// an expression tree grows taller than the evaluator allows.
    NestingTooDeep {
        /// Byte offset of the token at which the limit was exceeded.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset of the input that triggered the error.
    ///
    /// ## Example
    /// ```
    /// use spi::error::ParseError;
    ///
    /// let err = ParseError::InvalidCharacter { character: '#',
    ///                                          position:  4, };
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
            Self::InvalidSyntax { found, .. } => found.position,
            Self::NestingTooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at position {position}: Invalid character '{character}'.")
            },
            Self::LiteralTooLarge { literal, position } => write!(f,
                                                                  "Error at position {position}: Integer literal {literal} is too large."),
            Self::InvalidSyntax { expected, found } => write!(f,
                                                              "Error at position {}: Invalid syntax, expected {expected} but found {found}.",
                                                              found.position),
            Self::NestingTooDeep { position } => {
                write!(f, "Error at position {position}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
