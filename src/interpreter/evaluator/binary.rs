use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary operation between two integers.
    ///
    /// Division truncates toward zero, so `-7 / 2` is `-3`. All operations
    /// are checked; nothing wraps.
    ///
    /// # Errors
    /// - `DivisionByZero` when the right operand of `/` is zero.
    /// - `Overflow` when the result does not fit into an `i64`.
    ///
    /// # Example
    /// ```
    /// use spi::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Sub, 3, 4, 0), Ok(-1));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 7, 2, 0), Ok(3));
    /// assert!(Context::eval_binary(BinaryOperator::Div, 7, 0, 0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       position: usize)
                       -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
        };
        result.ok_or(RuntimeError::Overflow { position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(Context::eval_binary(BinaryOperator::Div, -7, 2, 0), Ok(-3));
        assert_eq!(Context::eval_binary(BinaryOperator::Div, 7, -2, 0), Ok(-3));
        assert_eq!(Context::eval_binary(BinaryOperator::Div, -8, -2, 0), Ok(4));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(Context::eval_binary(BinaryOperator::Div, 1, 0, 6),
                   Err(RuntimeError::DivisionByZero { position: 6 }));
        assert_eq!(Context::eval_binary(BinaryOperator::Div, 0, 0, 1),
                   Err(RuntimeError::DivisionByZero { position: 1 }));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(Context::eval_binary(BinaryOperator::Add, i64::MAX, 1, 3),
                   Err(RuntimeError::Overflow { position: 3 }));
        assert_eq!(Context::eval_binary(BinaryOperator::Sub, i64::MIN, 1, 3),
                   Err(RuntimeError::Overflow { position: 3 }));
        assert_eq!(Context::eval_binary(BinaryOperator::Mul, i64::MAX, 2, 3),
                   Err(RuntimeError::Overflow { position: 3 }));
        assert_eq!(Context::eval_binary(BinaryOperator::Div, i64::MIN, -1, 3),
                   Err(RuntimeError::Overflow { position: 3 }));
    }
}
