/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions reduce to an integer. Variants that can fail at run time carry
/// the byte position of the token that produced them, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i64,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Byte offset of the identifier in the source line.
        position: usize,
    },
    /// A prefix sign operation (e.g. `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset of the operator in the source line.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source line.
        position: usize,
    },
}

impl Expr {
    /// Height of the expression tree; a leaf has depth 1.
    ///
    /// ## Example
    /// ```
    /// use spi::ast::{Expr, UnaryOperator};
    ///
    /// let leaf = Expr::Number { value: 3 };
    /// assert_eq!(leaf.depth(), 1);
    ///
    /// let negated = Expr::UnaryOp { op:       UnaryOperator::Negate,
    ///                               expr:     Box::new(leaf),
    ///                               position: 0, };
    /// assert_eq!(negated.depth(), 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } | Self::Variable { .. } => 1,
            Self::UnaryOp { expr, .. } => expr.depth() + 1,
            Self::BinaryOp { left, right, .. } => left.depth().max(right.depth()) + 1,
        }
    }
}

/// A statement inside a `BEGIN ... END` program.
///
/// Statements produce no value; their effect is on the variable scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A `BEGIN ... END` block of statements run in order.
    Compound {
        /// Statements inside the block.
        statements: Vec<Self>,
    },
    /// Binds a variable name to the value of an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
    /// The empty statement.
    NoOp,
}

/// The root produced by parsing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// A bare expression, evaluated for its value.
    Expression(Expr),
    /// A `BEGIN ... END.` program, evaluated for its effect on the scope.
    Program(Statement),
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}

/// Renders the expression fully parenthesized, making the parsed grouping
/// visible.
///
/// ## Example
/// ```
/// use spi::ast::{BinaryOperator, Expr};
///
/// let one = Box::new(Expr::Number { value: 1 });
/// let two = Box::new(Expr::Number { value: 2 });
/// let expr = Expr::BinaryOp { left:     one,
///                             op:       BinaryOperator::Sub,
///                             right:    two,
///                             position: 2, };
///
/// assert_eq!(expr.to_string(), "(1 - 2)");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compound { statements } => {
                let body = statements.iter()
                                     .map(ToString::to_string)
                                     .collect::<Vec<_>>()
                                     .join("; ");
                let body = body.trim_end();
                if body.is_empty() {
                    write!(f, "BEGIN END")
                } else {
                    write!(f, "BEGIN {body} END")
                }
            },
            Self::Assignment { name, value } => write!(f, "{name} := {value}"),
            Self::NoOp => Ok(()),
        }
    }
}

impl std::fmt::Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expression(expr) => write!(f, "{expr}"),
            Self::Program(statement) => write!(f, "{statement}."),
        }
    }
}
