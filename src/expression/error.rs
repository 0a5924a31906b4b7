//! Error types for lambda construction checks and evaluation.

use crate::expression::value::DataType;
use thiserror::Error;

/// Errors that can occur while checking or evaluating a lambda
#[derive(Error, Debug)]
pub enum LambdaError {
    /// A value could not be converted to the type an operation needs
    #[error("Type mismatch in {context}: expected {expected:?}, got {actual:?}")]
    TypeMismatch {
        expected: DataType,
        actual: DataType,
        context: String,
    },

    /// The operator is not defined for the (promoted) operand types
    #[error("Invalid operand types for operator {operator}: left={left:?}, right={right:?}")]
    InvalidOperandTypes {
        operator: &'static str,
        left: DataType,
        right: DataType,
    },

    /// Integer division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,

    /// Assignment target does not evaluate to the bound input
    #[error("Left side of assignment is not assignable (evaluates to a {found:?} value)")]
    NotAssignable { found: DataType },

    /// Stream insertion whose left side is not an output stream
    #[error("Left side of '<<' is not an output stream (got {found:?})")]
    NotAStream { found: DataType },

    /// The writer behind an output sink has been dropped
    #[error("Output sink has been dropped")]
    SinkClosed,

    /// The writer behind an output sink is borrowed elsewhere
    #[error("Output sink is already borrowed")]
    SinkBusy,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for lambda operations
pub type LambdaResult<T> = Result<T, LambdaError>;
