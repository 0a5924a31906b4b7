//! Operator tags for binary lambda nodes.

use crate::expression::promote::promote;
use crate::expression::value::DataType;

/// Binary operators a lambda node can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Store the right value into the bound input
    Assign,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    /// Write the right value into the left stream
    StreamInsert,

    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOperator {
    /// Get the output type of this operator given operand types
    pub fn output_type(&self, left: DataType, right: DataType) -> DataType {
        match self {
            // The right value is converted to the assignee's type
            BinaryOperator::Assign => left,

            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div
            | BinaryOperator::StreamInsert => promote(left, right),

            BinaryOperator::Eq
            | BinaryOperator::Ne
            | BinaryOperator::Lt
            | BinaryOperator::Le
            | BinaryOperator::Gt
            | BinaryOperator::Ge => DataType::Boolean,
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div
        )
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Eq
                | BinaryOperator::Ne
                | BinaryOperator::Lt
                | BinaryOperator::Le
                | BinaryOperator::Gt
                | BinaryOperator::Ge
        )
    }

    /// Get the display string for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Assign => "=",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::StreamInsert => "<<",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_operator_output_types() {
        // Arithmetic follows the promotion table
        assert_eq!(
            BinaryOperator::Add.output_type(DataType::Integer, DataType::Integer),
            DataType::Integer
        );
        assert_eq!(
            BinaryOperator::Mul.output_type(DataType::Integer, DataType::Real32),
            DataType::Real32
        );
        assert_eq!(
            BinaryOperator::Div.output_type(DataType::Real64, DataType::Integer),
            DataType::Real64
        );

        // Stream insertion always yields the stream
        assert_eq!(
            BinaryOperator::StreamInsert.output_type(DataType::Stream, DataType::Real64),
            DataType::Stream
        );

        // Assignment keeps the assignee's type
        assert_eq!(
            BinaryOperator::Assign.output_type(DataType::Integer, DataType::Real64),
            DataType::Integer
        );

        // Comparisons always return boolean
        assert_eq!(
            BinaryOperator::Gt.output_type(DataType::Integer, DataType::Real64),
            DataType::Boolean
        );
    }

    #[test]
    fn test_operator_classes() {
        assert!(BinaryOperator::Sub.is_arithmetic());
        assert!(!BinaryOperator::Assign.is_arithmetic());
        assert!(!BinaryOperator::StreamInsert.is_arithmetic());
        assert!(BinaryOperator::Le.is_comparison());
        assert!(!BinaryOperator::Div.is_comparison());
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(BinaryOperator::Add.as_str(), "+");
        assert_eq!(BinaryOperator::Assign.as_str(), "=");
        assert_eq!(BinaryOperator::StreamInsert.as_str(), "<<");
        assert_eq!(BinaryOperator::Ne.as_str(), "!=");
    }
}
