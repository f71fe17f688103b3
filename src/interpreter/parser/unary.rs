use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenValue},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: a signed factor or a primary expression.
    ///
    /// Sign operators are right-associative, so `--9` parses as `-(-9)`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | INTEGER
    ///             | "(" expr ")"
    ///             | variable
    /// ```
    ///
    /// # Errors
    /// - `InvalidSyntax` when the current token cannot start a factor.
    /// - `NestingTooDeep` when signs and parentheses nest past the limit.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current().kind {
            TokenKind::Plus => self.parse_signed(TokenKind::Plus, UnaryOperator::Plus),
            TokenKind::Minus => self.parse_signed(TokenKind::Minus, UnaryOperator::Negate),
            TokenKind::Integer => self.parse_integer(),
            TokenKind::LParen => self.parse_grouping(),
            TokenKind::Id => self.parse_variable(),
            _ => Err(self.unexpected(TokenKind::Integer)),
        }
    }

    fn parse_signed(&mut self, kind: TokenKind, op: UnaryOperator) -> ParseResult<Expr> {
        self.enter()?;
        let operator = self.eat(kind)?;
        let expr = self.parse_factor()?;
        self.leave();

        Self::check_depth(expr.depth() + 1, operator.position)?;
        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           position: operator.position })
    }

    fn parse_integer(&mut self) -> ParseResult<Expr> {
        let token = self.eat(TokenKind::Integer)?;
        match token.value {
            TokenValue::Integer(value) => Ok(Expr::Number { value }),
            _ => Err(ParseError::InvalidSyntax { expected: TokenKind::Integer,
                                                 found:    token, }),
        }
    }

    /// Parses `"(" expr ")"`; the parentheses leave no node behind.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.enter()?;
        self.eat(TokenKind::LParen)?;
        let expr = self.parse_expr()?;
        self.eat(TokenKind::RParen)?;
        self.leave();
        Ok(expr)
    }

    /// Parses a variable reference.
    ///
    /// Grammar: `variable := ID`
    pub(crate) fn parse_variable(&mut self) -> ParseResult<Expr> {
        let token = self.eat(TokenKind::Id)?;
        match token.value {
            TokenValue::Text(name) => Ok(Expr::Variable { name,
                                                          position: token.position }),
            _ => Err(ParseError::InvalidSyntax { expected: TokenKind::Id,
                                                 found:    token, }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Ast, Expr, UnaryOperator},
        error::ParseError,
        interpreter::{
            lexer::{ReservedWords, TokenKind},
            parser::core::parse_source,
        },
    };

    fn grouping(source: &str) -> String {
        parse_source(source, &ReservedWords::default()).unwrap()
                                                       .to_string()
    }

    #[test]
    fn sign_operators_nest_to_the_right() {
        assert_eq!(grouping("--9"), "(-(-9))");
        assert_eq!(grouping("+-+3"), "(+(-(+3)))");
        assert_eq!(grouping("-(3+4)"), "(-(3 + 4))");
    }

    #[test]
    fn unary_binds_tighter_than_binary() {
        assert_eq!(grouping("-2 * 3"), "((-2) * 3)");
        assert_eq!(grouping("5 - -2"), "(5 - (-2))");
    }

    #[test]
    fn parentheses_leave_no_node() {
        assert_eq!(parse_source("((7))", &ReservedWords::default()),
                   Ok(Ast::Expression(Expr::Number { value: 7 })));
    }

    #[test]
    fn variable_reference() {
        assert_eq!(parse_source(" -x", &ReservedWords::default()),
                   Ok(Ast::Expression(Expr::UnaryOp { op:       UnaryOperator::Negate,
                                                      expr:     Box::new(Expr::Variable { name:     "x".to_owned(),
                                                                                          position: 2, }),
                                                      position: 1, })));
    }

    #[test]
    fn missing_closing_paren() {
        let err = parse_source("(1 + 2", &ReservedWords::default()).unwrap_err();
        assert!(matches!(err,
                         ParseError::InvalidSyntax { expected: TokenKind::RParen,
                                                     .. }));
    }
}
