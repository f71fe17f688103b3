use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// # Errors
    /// `Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use spi::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, 5, 0), Ok(-5));
    /// assert_eq!(Context::eval_unary(UnaryOperator::Plus, -5, 0), Ok(-5));
    /// assert!(Context::eval_unary(UnaryOperator::Negate, i64::MIN, 0).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: i64, position: usize) -> EvalResult<i64> {
        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => {
                value.checked_neg()
                     .ok_or(RuntimeError::Overflow { position })
            },
        }
    }
}
