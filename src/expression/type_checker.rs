//! Type checking for lambdas.
//!
//! Values are dynamically typed, so an ill-typed composition such as
//! `_1 + "text"` only fails once evaluated. The checker infers a lambda's
//! result type for a given input type and rejects such compositions up front,
//! before any element is processed.

use crate::expression::error::{LambdaError, LambdaResult};
use crate::expression::expr::{Lambda, Node};
use crate::expression::operator::BinaryOperator;
use crate::expression::promote::{comparison_type, promote};
use crate::expression::value::DataType;

/// Type checker for lambdas
pub struct TypeChecker {
    /// Type of the value bound to the placeholder
    input: DataType,
}

impl TypeChecker {
    /// Create a new type checker for the given input type
    pub fn new(input: DataType) -> Self {
        Self { input }
    }

    /// Type check a lambda and return its result type
    pub fn check(&self, lambda: &Lambda) -> LambdaResult<DataType> {
        self.check_node(lambda.root())
    }

    fn check_node(&self, node: &Node) -> LambdaResult<DataType> {
        match node {
            Node::Placeholder => Ok(self.input),

            Node::Literal(value) => Ok(value.data_type()),

            Node::Sink(_) => Ok(DataType::Stream),

            Node::Binary { op, left, right } => {
                let left_type = self.check_node(left)?;
                let right_type = self.check_node(right)?;
                self.check_binary(*op, left, left_type, right_type)
            }
        }
    }

    fn check_binary(
        &self,
        op: BinaryOperator,
        left: &Node,
        left_type: DataType,
        right_type: DataType,
    ) -> LambdaResult<DataType> {
        let invalid = || LambdaError::InvalidOperandTypes {
            operator: op.as_str(),
            left: left_type,
            right: right_type,
        };

        match op {
            BinaryOperator::Assign => {
                if !left.is_assignable() {
                    return Err(LambdaError::NotAssignable { found: left_type });
                }
                if !right_type.can_cast_to(left_type) {
                    return Err(LambdaError::TypeMismatch {
                        expected: left_type,
                        actual: right_type,
                        context: "assignment".to_string(),
                    });
                }
            }

            BinaryOperator::StreamInsert => {
                if left_type != DataType::Stream {
                    return Err(LambdaError::NotAStream { found: left_type });
                }
            }

            op if op.is_arithmetic() => {
                let common = promote(left_type, right_type);
                if !common.is_numeric()
                    || !left_type.can_cast_to(common)
                    || !right_type.can_cast_to(common)
                {
                    return Err(invalid());
                }
            }

            op if op.is_comparison() => {
                let common = comparison_type(left_type, right_type).ok_or_else(invalid)?;
                if !left_type.can_cast_to(common) || !right_type.can_cast_to(common) {
                    return Err(invalid());
                }
                let ordered = !matches!(common, DataType::Stream | DataType::Directive);
                if !ordered && !matches!(op, BinaryOperator::Eq | BinaryOperator::Ne) {
                    return Err(invalid());
                }
            }

            _ => return Err(invalid()),
        }

        Ok(op.output_type(left_type, right_type))
    }
}

impl Lambda {
    /// Result type of this lambda when bound to a value of type `input`
    pub fn result_type(&self, input: DataType) -> LambdaResult<DataType> {
        TypeChecker::new(input).check(self)
    }

    /// Validate this lambda for inputs of type `input`, handing it back if
    /// well typed
    pub fn checked(self, input: DataType) -> LambdaResult<Self> {
        self.result_type(input)?;
        Ok(self)
    }
}

/// Helper function to type check a lambda
pub fn type_check_lambda(lambda: &Lambda, input: DataType) -> LambdaResult<DataType> {
    TypeChecker::new(input).check(lambda)
}
