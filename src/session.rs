use std::collections::BTreeMap;

use log::{debug, info};

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::Context, lexer::ReservedWords, parser::core::parse_source},
};

/// One interactive session: a reserved-word table and a persistent scope.
///
/// Lines are evaluated one at a time, in order, against the same scope.
///
/// # Example
/// ```
/// use spi::Session;
///
/// let mut session = Session::new();
///
/// assert_eq!(session.evaluate_line("2 + 3 * 4").unwrap(), Some(14));
/// assert_eq!(session.evaluate_line("BEGIN x := 2; y := x + 3; END.").unwrap(), None);
///
/// let scope = session.inspect_scope();
/// assert_eq!(scope["x"], 2);
/// assert_eq!(scope["y"], 5);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    reserved: ReservedWords,
    context:  Context,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with an empty scope and the default reserved words.
    #[must_use]
    pub fn new() -> Self {
        info!("starting session");
        Self { reserved: ReservedWords::default(),
               context:  Context::new() }
    }

    /// Lexes, parses and evaluates one line of source text.
    ///
    /// Returns `Some(value)` for a bare expression and `None` for a program,
    /// whose effect is the updated scope. On error the scope is exactly as it
    /// was before the call.
    ///
    /// # Errors
    /// Any lexical, syntax or runtime error of the line.
    pub fn evaluate_line(&mut self, line: &str) -> Result<Option<i64>, EvalError> {
        debug!("evaluating {line:?}");
        let ast = parse_source(line, &self.reserved)?;
        Ok(self.context.eval(&ast)?)
    }

    /// A sorted snapshot of every variable assigned so far.
    #[must_use]
    pub fn inspect_scope(&self) -> BTreeMap<String, i64> {
        self.context.scope.snapshot()
    }

    /// The reserved-word table this session lexes with.
    #[must_use]
    pub const fn reserved_words(&self) -> &ReservedWords {
        &self.reserved
    }
}
