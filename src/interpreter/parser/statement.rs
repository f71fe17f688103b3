use crate::{
    ast::{Expr, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a program: a compound statement terminated by a dot.
    ///
    /// Grammar: `program := compound "."`
    pub(crate) fn parse_program(&mut self) -> ParseResult<Statement> {
        let block = self.parse_compound()?;
        self.eat(TokenKind::Dot)?;
        Ok(block)
    }

    /// Parses a `BEGIN ... END` block.
    ///
    /// Grammar: `compound := "BEGIN" statement_list "END"`
    pub(crate) fn parse_compound(&mut self) -> ParseResult<Statement> {
        self.enter()?;
        self.eat(TokenKind::Begin)?;
        let statements = self.parse_statement_list()?;
        self.eat(TokenKind::End)?;
        self.leave();
        Ok(Statement::Compound { statements })
    }

    /// Parses semicolon-separated statements.
    ///
    /// An identifier directly after a statement means a separator is missing
    /// and is reported as such.
    ///
    /// Grammar: `statement_list := statement (";" statement)*`
    fn parse_statement_list(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = vec![self.parse_statement()?];

        while self.current().kind == TokenKind::Semi {
            self.eat(TokenKind::Semi)?;
            statements.push(self.parse_statement()?);
        }

        if self.current().kind == TokenKind::Id {
            return Err(self.unexpected(TokenKind::Semi));
        }

        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// Grammar: `statement := compound | assignment | empty`
    fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current().kind {
            TokenKind::Begin => self.parse_compound(),
            TokenKind::Id => self.parse_assignment(),
            _ => Ok(Statement::NoOp),
        }
    }

    /// Parses an assignment.
    ///
    /// Grammar: `assignment := variable ":=" expr`
    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let Expr::Variable { name, .. } = self.parse_variable()? else {
            return Err(self.unexpected(TokenKind::Id));
        };
        self.eat(TokenKind::Assign)?;
        let value = self.parse_expr()?;
        Ok(Statement::Assignment { name, value })
    }
}
