use crate::{ast::BinaryOperator, interpreter::value::core::ValueKind};

#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Tried to read a variable with no recorded value.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The operator is not defined for the given operand kinds.
    UnsupportedOperation {
        /// The operator that was applied.
        op:    BinaryOperator,
        /// The kind of the left operand.
        left:  ValueKind,
        /// The kind of the right operand.
        right: ValueKind,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Evaluation error: Unknown variable '{name}'.")
            },

            Self::UnsupportedOperation { op, left, right } => write!(f,
                                                                     "Evaluation error: '{op}' is not defined between {left} and {right}."),

            Self::DivisionByZero => {
                write!(f, "Evaluation error: The right-hand operand of '/' is zero.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
