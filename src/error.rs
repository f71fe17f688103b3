/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// text: characters outside the language, oversized literals, and tokens that
/// do not fit the grammar.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// line, such as reading an unset variable or dividing by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of a single `evaluate_line` call.
///
/// Every error aborts the line it came from; the session stays usable.
pub enum EvalError {
    /// The line could not be tokenized or parsed.
    Parse(ParseError),
    /// The line parsed but could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
