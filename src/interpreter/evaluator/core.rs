use log::debug;

use crate::{
    ast::{Ast, Expr, Statement},
    error::RuntimeError,
    interpreter::scope::VariableScope,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the variable scope that assignments write to and
/// variable references read from. It is created once per session and reused
/// for every evaluated line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// Variables assigned so far.
    pub scope: VariableScope,
}

impl Context {
    /// Creates a new evaluation context with an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a parsed line.
    ///
    /// Expressions yield their value. Programs yield `None`; their effect is
    /// the updated scope. A program runs against a staged copy of the scope
    /// that replaces the live one only when every statement succeeded, so a
    /// failing program leaves the scope untouched.
    ///
    /// # Example
    /// ```
    /// use spi::{
    ///     interpreter::{evaluator::core::Context, lexer::ReservedWords, parser::core::parse_source},
    /// };
    ///
    /// let reserved = ReservedWords::default();
    /// let mut context = Context::new();
    ///
    /// let program = parse_source("BEGIN a := 1; b := z END.", &reserved).unwrap();
    /// assert!(context.eval(&program).is_err());
    /// assert!(context.scope.is_empty());
    ///
    /// let expr = parse_source("6 * 7", &reserved).unwrap();
    /// assert_eq!(context.eval(&expr).unwrap(), Some(42));
    /// ```
    pub fn eval(&mut self, ast: &Ast) -> EvalResult<Option<i64>> {
        match ast {
            Ast::Expression(expr) => self.eval_expr(expr).map(Some),
            Ast::Program(statement) => {
                let mut staged = self.clone();
                staged.eval_statement(statement)?;
                debug!("committing scope with {} variable(s)", staged.scope.len());
                *self = staged;
                Ok(None)
            },
        }
    }

    /// Evaluates an expression to an integer.
    ///
    /// Operands of a binary operation are evaluated left before right.
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Number { value } => Ok(*value),
            Expr::Variable { name, position } => self.eval_variable(name, *position),
            Expr::UnaryOp { op, expr, position } => {
                let value = self.eval_expr(expr)?;
                Self::eval_unary(*op, value, *position)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Self::eval_binary(*op, left, right, *position)
            },
        }
    }

    /// Executes a statement for its effect on the scope.
    ///
    /// An assignment stores its value only after the right-hand side has been
    /// fully evaluated.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Compound { statements } => {
                for statement in statements {
                    self.eval_statement(statement)?;
                }
                Ok(())
            },
            Statement::Assignment { name, value } => {
                let value = self.eval_expr(value)?;
                self.scope.set(name, value);
                Ok(())
            },
            Statement::NoOp => Ok(()),
        }
    }

    /// Reads a variable from the scope.
    ///
    /// # Errors
    /// `UndefinedVariable` if `name` was never assigned.
    pub fn eval_variable(&self, name: &str, position: usize) -> EvalResult<i64> {
        self.scope
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_owned(),
                                                             position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::ReservedWords, parser::core::parse_source};

    fn run(context: &mut Context, source: &str) -> EvalResult<Option<i64>> {
        let ast = parse_source(source, &ReservedWords::default()).unwrap();
        context.eval(&ast)
    }

    #[test]
    fn later_assignment_overwrites() {
        let mut context = Context::new();
        assert_eq!(run(&mut context, "BEGIN a := 1; a := a + 1; END."), Ok(None));
        assert_eq!(context.scope.get("a"), Some(2));
        assert_eq!(context.scope.len(), 1);
    }

    #[test]
    fn nested_blocks_share_one_scope() {
        let mut context = Context::new();
        run(&mut context, "BEGIN BEGIN a := 3 END; b := a * a END.").unwrap();
        assert_eq!(context.scope.get("a"), Some(3));
        assert_eq!(context.scope.get("b"), Some(9));
    }

    #[test]
    fn scope_persists_across_lines() {
        let mut context = Context::new();
        run(&mut context, "BEGIN x := 5 END.").unwrap();
        assert_eq!(run(&mut context, "x * 2"), Ok(Some(10)));
        run(&mut context, "BEGIN x := x - 1 END.").unwrap();
        assert_eq!(context.scope.get("x"), Some(4));
    }

    #[test]
    fn undefined_variable_is_reported_with_its_position() {
        let mut context = Context::new();
        assert_eq!(run(&mut context, "BEGIN y := z + 1; END."),
                   Err(RuntimeError::UndefinedVariable { name:     "z".to_owned(),
                                                         position: 11, }));
        assert!(context.scope.is_empty());
    }

    #[test]
    fn failed_program_keeps_earlier_bindings_unchanged() {
        let mut context = Context::new();
        run(&mut context, "BEGIN a := 1 END.").unwrap();
        assert!(run(&mut context, "BEGIN a := 100; b := 1 / 0 END.").is_err());
        assert_eq!(context.scope.get("a"), Some(1));
        assert_eq!(context.scope.get("b"), None);
    }

    #[test]
    fn self_reference_before_assignment_fails() {
        let mut context = Context::new();
        assert!(matches!(run(&mut context, "BEGIN n := n + 1 END."),
                         Err(RuntimeError::UndefinedVariable { .. })));
    }
}
