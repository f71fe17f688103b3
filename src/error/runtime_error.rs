#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset of the reference in the line.
        position: usize,
    },
    /// The right operand of `/` evaluated to zero.
    DivisionByZero {
        /// Byte offset of the operator in the line.
        position: usize,
    },
    /// Arithmetic left the range of a 64-bit signed integer.
    Overflow {
        /// Byte offset of the operator in the line.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, position } => {
                write!(f, "Error at position {position}: Undefined variable '{name}'.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
