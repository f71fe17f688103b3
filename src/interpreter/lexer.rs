use std::collections::HashMap;

use log::trace;
use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// The closed set of token classes produced by the [`Lexer`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Non-negative integer literal, such as `42`.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Identifier that is not a reserved word, such as `x`.
    Id,
    /// `:=`
    Assign,
    /// `;`
    Semi,
    /// `.`
    Dot,
    /// Reserved word `BEGIN`, in any letter case.
    Begin,
    /// Reserved word `END`, in any letter case.
    End,
    /// End of input.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Id => "ID",
            Self::Assign => "ASSIGN",
            Self::Semi => "SEMI",
            Self::Dot => "DOT",
            Self::Begin => "BEGIN",
            Self::End => "END",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// The payload carried by a [`Token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// The parsed value of an `INTEGER` token.
    Integer(i64),
    /// The source spelling of identifiers, keywords and punctuation.
    Text(String),
    /// Carried only by `EOF`.
    None,
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::None => write!(f, "None"),
        }
    }
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer: a
/// [`TokenKind`], its [`TokenValue`] and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The class of the token.
    pub kind:     TokenKind,
    /// The literal value or spelling.
    pub value:    TokenValue,
    /// Byte offset of the first character of the token.
    pub position: usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub const fn new(kind: TokenKind, value: TokenValue, position: usize) -> Self {
        Self { kind,
               value,
               position }
    }

    /// Creates the end-of-input token for a source of length `position`.
    #[must_use]
    pub const fn eof(position: usize) -> Self {
        Self::new(TokenKind::Eof, TokenValue::None, position)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, {})", self.kind, self.value)
    }
}

/// Failure classes reported by the raw scanner.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum ScanFailure {
    #[default]
    InvalidCharacter,
    LiteralTooLarge,
}

/// Tokens as the scanner sees them, before reserved words are folded.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r" +")]
#[logos(error = ScanFailure)]
enum RawToken {
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| ScanFailure::LiteralTooLarge))]
    Integer(i64),
    #[regex(r"\p{Alphabetic}+", |lex| lex.slice().to_owned())]
    Identifier(String),
    #[token(":=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semi,
    #[token(".")]
    Dot,
}

/// The table of identifier spellings that lex as keywords.
///
/// Lookups are case-insensitive: the key is the upper-case spelling. A table
/// is built explicitly and handed to every [`Lexer`] by reference, so sessions
/// never share hidden global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWords {
    words: HashMap<String, TokenKind>,
}

impl Default for ReservedWords {
    fn default() -> Self {
        let words = [("BEGIN", TokenKind::Begin), ("END", TokenKind::End)];
        Self { words: words.into_iter()
                           .map(|(spelling, kind)| (spelling.to_owned(), kind))
                           .collect(), }
    }
}

impl ReservedWords {
    /// Returns the keyword kind for `spelling`, if it is reserved.
    ///
    /// ## Example
    /// ```
    /// use spi::interpreter::lexer::{ReservedWords, TokenKind};
    ///
    /// let reserved = ReservedWords::default();
    /// assert_eq!(reserved.lookup("begin"), Some(TokenKind::Begin));
    /// assert_eq!(reserved.lookup("x"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, spelling: &str) -> Option<TokenKind> {
        self.words.get(&spelling.to_ascii_uppercase()).copied()
    }
}

/// A pull-based scanner over one line of source text.
///
/// Each call to [`Lexer::next_token`] yields the next token. Once the input is
/// exhausted every further call yields `EOF`.
pub struct Lexer<'a> {
    inner:     logos::Lexer<'a, RawToken>,
    reserved:  &'a ReservedWords,
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str, reserved: &'a ReservedWords) -> Self {
        Self { inner: RawToken::lexer(source),
               reserved,
               exhausted: false }
    }

    /// Scans and returns the next token.
    ///
    /// # Errors
    /// - `InvalidCharacter` for a character that starts no token, including a
    ///   `:` that is not followed by `=`.
    /// - `LiteralTooLarge` for an integer literal outside the `i64` range.
    ///
    /// # Example
    /// ```
    /// use spi::interpreter::lexer::{Lexer, ReservedWords, TokenKind};
    ///
    /// let reserved = ReservedWords::default();
    /// let mut lexer = Lexer::new("x := 1", &reserved);
    ///
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Id);
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Assign);
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer);
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    /// ```
    pub fn next_token(&mut self) -> ParseResult<Token> {
        if self.exhausted {
            return Ok(Token::eof(self.inner.source().len()));
        }

        let Some(raw) = self.inner.next() else {
            self.exhausted = true;
            return Ok(Token::eof(self.inner.source().len()));
        };

        let position = self.inner.span().start;
        let token = match raw {
            Ok(raw) => self.classify(raw, position),
            Err(failure) => return Err(self.failure(&failure, position)),
        };

        trace!("lexed {token} at {position}");
        Ok(token)
    }

    /// Converts a raw token into a [`Token`], folding reserved words.
    fn classify(&self, raw: RawToken, position: usize) -> Token {
        let kind = match raw {
            RawToken::Integer(n) => {
                return Token::new(TokenKind::Integer, TokenValue::Integer(n), position);
            },
            RawToken::Identifier(name) => {
                let kind = self.reserved.lookup(&name).unwrap_or(TokenKind::Id);
                return Token::new(kind, TokenValue::Text(name), position);
            },
            RawToken::Assign => TokenKind::Assign,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Mul => TokenKind::Mul,
            RawToken::Div => TokenKind::Div,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Semi => TokenKind::Semi,
            RawToken::Dot => TokenKind::Dot,
        };
        Token::new(kind, TokenValue::Text(self.inner.slice().to_owned()), position)
    }

    fn failure(&self, failure: &ScanFailure, position: usize) -> ParseError {
        let slice = self.inner.slice();
        match failure {
            ScanFailure::InvalidCharacter => {
                ParseError::InvalidCharacter { character: slice.chars().next().unwrap_or_default(),
                                               position }
            },
            ScanFailure::LiteralTooLarge => ParseError::LiteralTooLarge { literal: slice.to_owned(),
                                                                          position },
        }
    }
}

/// Scans `source` to the end and returns every token, `EOF` included.
///
/// # Errors
/// Returns the first lexical error encountered.
pub fn tokenize(source: &str, reserved: &ReservedWords) -> ParseResult<Vec<Token>> {
    let mut lexer = Lexer::new(source, reserved);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
