use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`. Each
    /// repetition folds into the tree built so far, so `1 - 2 - 3` parses as
    /// `(1 - 2) - 3`.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression.
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        let mut depth = left.depth();
        loop {
            if let Some(op) = token_to_binary_operator(self.current().kind)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                let operator = self.eat(self.current().kind)?;
                let right = self.parse_term()?;
                depth = depth.max(right.depth()) + 1;
                Self::check_depth(depth, operator.position)?;
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        position: operator.position };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*` and `/`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        let mut depth = left.depth();
        loop {
            if let Some(op) = token_to_binary_operator(self.current().kind)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                let operator = self.eat(self.current().kind)?;
                let right = self.parse_factor()?;
                depth = depth.max(right.depth()) + 1;
                Self::check_depth(depth, operator.position)?;
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        position: operator.position };
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all kinds that are not binary operators.
///
/// # Example
/// ```
/// use spi::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Semi), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Mul => Some(BinaryOperator::Mul),
        TokenKind::Div => Some(BinaryOperator::Div),
        _ => None,
    }
}
