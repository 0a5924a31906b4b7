//! Lambda evaluation.

use crate::expression::error::{LambdaError, LambdaResult};
use crate::expression::expr::{Lambda, Node};
use crate::expression::operator::BinaryOperator;
use crate::expression::promote::{comparison_type, promote};
use crate::expression::value::{DataType, Value};
use std::cmp::Ordering;

/// Outcome of evaluating a node against a bound input
#[derive(Debug)]
pub enum Evaluated<'a> {
    /// The bound input itself, e.g. from the placeholder or an assignment
    Bound(&'a mut Value),
    /// A freshly computed value
    Owned(Value),
}

impl<'a> Evaluated<'a> {
    pub fn value(&self) -> &Value {
        match self {
            Evaluated::Bound(value) => value,
            Evaluated::Owned(value) => value,
        }
    }

    /// Take the result by value, copying it out of the input if bound
    pub fn into_value(self) -> Value {
        match self {
            Evaluated::Bound(value) => value.clone(),
            Evaluated::Owned(value) => value,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, Evaluated::Bound(_))
    }

    /// The mutable reference to the input, if this result is one
    pub fn into_bound(self) -> Option<&'a mut Value> {
        match self {
            Evaluated::Bound(value) => Some(value),
            Evaluated::Owned(_) => None,
        }
    }
}

impl Lambda {
    /// Evaluate against `input`.
    ///
    /// Placeholder-rooted and assignment-rooted lambdas return
    /// [`Evaluated::Bound`], so callers can keep mutating the input.
    pub fn evaluate<'a>(&self, input: &'a mut Value) -> LambdaResult<Evaluated<'a>> {
        evaluate_node(self.root(), input)
    }

    /// Evaluate against `input` and return the result by value
    pub fn call(&self, input: &mut Value) -> LambdaResult<Value> {
        Ok(self.evaluate(input)?.into_value())
    }

    /// Evaluate against an owned input
    pub fn apply(&self, input: impl Into<Value>) -> LambdaResult<Value> {
        let mut bound = input.into();
        self.call(&mut bound)
    }
}

/// Evaluate a single node against `input`
pub fn evaluate_node<'a>(node: &Node, input: &'a mut Value) -> LambdaResult<Evaluated<'a>> {
    match node {
        Node::Placeholder => Ok(Evaluated::Bound(input)),

        Node::Literal(value) => Ok(Evaluated::Owned(value.clone())),

        Node::Sink(sink) => Ok(Evaluated::Owned(Value::Stream(sink.clone()))),

        Node::Binary {
            op: BinaryOperator::Assign,
            left,
            right,
        } => {
            // The right side is computed before the input is borrowed as the target
            let value = evaluate_node(right, input)?.into_value();
            match evaluate_node(left, input)? {
                Evaluated::Bound(slot) => {
                    assign(slot, value)?;
                    Ok(Evaluated::Bound(slot))
                }
                Evaluated::Owned(other) => Err(LambdaError::NotAssignable {
                    found: other.data_type(),
                }),
            }
        }

        Node::Binary { op, left, right } => {
            let left_val = evaluate_node(left, input)?.into_value();
            let right_val = evaluate_node(right, input)?.into_value();
            evaluate_binary_op(*op, left_val, right_val).map(Evaluated::Owned)
        }
    }
}

/// Store `value` into `slot`, converted to the slot's current type
fn assign(slot: &mut Value, value: Value) -> LambdaResult<()> {
    let target = slot.data_type();
    let actual = value.data_type();
    *slot = value.cast(target).map_err(|_| LambdaError::TypeMismatch {
        expected: target,
        actual,
        context: "assignment".to_string(),
    })?;
    Ok(())
}

/// Apply a non-assignment operator to two evaluated operands
pub fn evaluate_binary_op(op: BinaryOperator, left: Value, right: Value) -> LambdaResult<Value> {
    match op {
        BinaryOperator::Assign => Err(LambdaError::NotAssignable {
            found: left.data_type(),
        }),

        BinaryOperator::StreamInsert => match left {
            Value::Stream(sink) => {
                sink.write_value(&right)?;
                Ok(Value::Stream(sink))
            }
            other => Err(LambdaError::NotAStream {
                found: other.data_type(),
            }),
        },

        op if op.is_arithmetic() => evaluate_arithmetic(op, left, right),

        op if op.is_comparison() => evaluate_comparison(op, left, right),

        op => Err(LambdaError::InvalidOperandTypes {
            operator: op.as_str(),
            left: left.data_type(),
            right: right.data_type(),
        }),
    }
}

/// Bring both operands to the common type `common_type` picks for them
fn convert_operands(
    op: BinaryOperator,
    left: Value,
    right: Value,
    common_type: fn(DataType, DataType) -> Option<DataType>,
) -> LambdaResult<(DataType, Value, Value)> {
    let left_type = left.data_type();
    let right_type = right.data_type();
    let invalid = || LambdaError::InvalidOperandTypes {
        operator: op.as_str(),
        left: left_type,
        right: right_type,
    };

    let common = common_type(left_type, right_type).ok_or_else(invalid)?;
    let left = left.cast(common).map_err(|_| invalid())?;
    let right = right.cast(common).map_err(|_| invalid())?;
    Ok((common, left, right))
}

fn evaluate_arithmetic(op: BinaryOperator, left: Value, right: Value) -> LambdaResult<Value> {
    let (left_type, right_type) = (left.data_type(), right.data_type());
    let (common, left, right) =
        convert_operands(op, left, right, |l, r| Some(promote(l, r)))?;
    if !common.is_numeric() {
        return Err(LambdaError::InvalidOperandTypes {
            operator: op.as_str(),
            left: left_type,
            right: right_type,
        });
    }

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => match op {
            BinaryOperator::Add => Ok(Value::Integer(a.wrapping_add(b))),
            BinaryOperator::Sub => Ok(Value::Integer(a.wrapping_sub(b))),
            BinaryOperator::Mul => Ok(Value::Integer(a.wrapping_mul(b))),
            _ => {
                if b == 0 {
                    Err(LambdaError::DivisionByZero)
                } else {
                    Ok(Value::Integer(a.wrapping_div(b)))
                }
            }
        },

        (Value::Real32(a), Value::Real32(b)) => Ok(Value::Real32(match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            _ => a / b,
        })),

        (Value::Real64(a), Value::Real64(b)) => Ok(Value::Real64(match op {
            BinaryOperator::Add => a + b,
            BinaryOperator::Sub => a - b,
            BinaryOperator::Mul => a * b,
            _ => a / b,
        })),

        _ => Err(LambdaError::InvalidOperandTypes {
            operator: op.as_str(),
            left: left_type,
            right: right_type,
        }),
    }
}

fn evaluate_comparison(op: BinaryOperator, left: Value, right: Value) -> LambdaResult<Value> {
    let (left_type, right_type) = (left.data_type(), right.data_type());
    let (common, left, right) = convert_operands(op, left, right, comparison_type)?;

    let ordered = !matches!(common, DataType::Stream | DataType::Directive);
    if !ordered && !matches!(op, BinaryOperator::Eq | BinaryOperator::Ne) {
        return Err(LambdaError::InvalidOperandTypes {
            operator: op.as_str(),
            left: left_type,
            right: right_type,
        });
    }

    // NaN compares unequal to everything
    let ordering = left.compare(&right);
    let result = match op {
        BinaryOperator::Eq => ordering == Some(Ordering::Equal),
        BinaryOperator::Ne => ordering != Some(Ordering::Equal),
        BinaryOperator::Lt => ordering == Some(Ordering::Less),
        BinaryOperator::Le => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOperator::Gt => ordering == Some(Ordering::Greater),
        _ => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
    };
    Ok(Value::Boolean(result))
}

/// Helper function to evaluate a lambda against an owned input
pub fn evaluate_lambda(lambda: &Lambda, input: impl Into<Value>) -> LambdaResult<Value> {
    lambda.apply(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::expr::{Compare, ARG};
    use crate::expression::sink::{Directive, OutputSink};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_literal_ignores_input() {
        let lambda = Lambda::from(42);
        assert_eq!(lambda.apply(7).unwrap(), Value::Integer(42));
        assert_eq!(lambda.apply("anything").unwrap(), Value::Integer(42));
    }

    #[test]
    fn test_placeholder_is_bound() {
        let lambda = Lambda::from(ARG);
        let mut input = Value::Integer(9);
        let result = lambda.evaluate(&mut input).unwrap();
        assert!(result.is_bound());

        *result.into_bound().unwrap() = Value::Integer(10);
        assert_eq!(input, Value::Integer(10));
    }

    #[test]
    fn test_arithmetic_operations() {
        let add = Lambda::binary(BinaryOperator::Add, ARG, 5);
        assert_eq!(add.apply(10).unwrap(), Value::Integer(15));

        let sub = Lambda::binary(BinaryOperator::Sub, 10, ARG);
        assert_eq!(sub.apply(4).unwrap(), Value::Integer(6));

        let mul = Lambda::binary(BinaryOperator::Mul, ARG, ARG);
        assert_eq!(mul.apply(-3).unwrap(), Value::Integer(9));

        // Integer division truncates
        let div = Lambda::binary(BinaryOperator::Div, ARG, 3);
        assert_eq!(div.apply(10).unwrap().as_i32(), Some(3));
    }

    #[test]
    fn test_promoted_result_types() {
        let lambda = Lambda::binary(BinaryOperator::Add, ARG, 0.5f32);
        let result = lambda.apply(2).unwrap();
        assert_eq!(result.data_type(), DataType::Real32);
        assert_eq!(result.as_f64(), Some(2.5));

        let lambda = Lambda::binary(BinaryOperator::Div, ARG, 4);
        let result = lambda.apply(1.0f64).unwrap();
        assert_eq!(result.data_type(), DataType::Real64);
        assert_eq!(result.as_f64(), Some(0.25));

        let lambda = Lambda::binary(BinaryOperator::Mul, 2.0f32, ARG);
        let result = lambda.apply(1.5f64).unwrap();
        assert_eq!(result.data_type(), DataType::Real64);
        assert_eq!(result.as_f64(), Some(3.0));
    }

    #[test]
    fn test_division_by_zero() {
        let lambda = Lambda::binary(BinaryOperator::Div, 1, ARG);
        assert!(matches!(
            lambda.apply(0),
            Err(LambdaError::DivisionByZero)
        ));

        // Floating point division follows IEEE semantics
        let result = lambda.apply(0.0f64).unwrap();
        assert_eq!(result.as_f64(), Some(f64::INFINITY));
    }

    #[test]
    fn test_invalid_operand_types() {
        let lambda = Lambda::binary(BinaryOperator::Add, ARG, 1);
        assert!(matches!(
            lambda.apply("text"),
            Err(LambdaError::InvalidOperandTypes {
                operator: "+",
                left: DataType::Text,
                right: DataType::Integer,
            })
        ));

        let lambda = Lambda::binary(BinaryOperator::Mul, ARG, "x");
        assert!(lambda.apply(2).is_err());
    }

    #[test]
    fn test_assignment_mutates_input() {
        let lambda = ARG.assign(5);
        let mut input = Value::Integer(1);

        let result = lambda.evaluate(&mut input).unwrap();
        assert!(result.is_bound());
        assert_eq!(result.value(), &Value::Integer(5));
        assert_eq!(input, Value::Integer(5));
    }

    #[test]
    fn test_assignment_converts_to_input_type() {
        let mut input = Value::Integer(0);
        ARG.assign(7.9f64).call(&mut input).unwrap();
        assert_eq!(input.as_i32(), Some(7));

        let mut input = Value::Real64(0.5);
        ARG.assign(Lambda::binary(BinaryOperator::Mul, ARG, 4))
            .call(&mut input)
            .unwrap();
        assert_eq!(input.as_f64(), Some(2.0));

        let mut input = Value::Integer(0);
        assert!(matches!(
            ARG.assign("five").call(&mut input),
            Err(LambdaError::TypeMismatch { .. })
        ));
        assert_eq!(input, Value::Integer(0));
    }

    #[test]
    fn test_assignment_result_chains() {
        // (_1 = 5) + 1 yields 6 and leaves the input at 5
        let lambda = Lambda::binary(BinaryOperator::Add, ARG.assign(5), 1);
        let mut input = Value::Integer(0);
        assert_eq!(lambda.call(&mut input).unwrap(), Value::Integer(6));
        assert_eq!(input, Value::Integer(5));
    }

    #[test]
    fn test_assign_to_non_assignable() {
        let lambda = Lambda::new(Node::binary(
            BinaryOperator::Assign,
            Node::Literal(Value::Integer(1)),
            Node::Literal(Value::Integer(2)),
        ));
        assert!(matches!(
            lambda.apply(0),
            Err(LambdaError::NotAssignable {
                found: DataType::Integer
            })
        ));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(ARG.gt(30).apply(32).unwrap(), Value::Boolean(true));
        assert_eq!(ARG.gt(30).apply(30).unwrap(), Value::Boolean(false));
        assert_eq!(ARG.ge(30).apply(30).unwrap(), Value::Boolean(true));
        assert_eq!(ARG.lt(2.5f64).apply(2).unwrap(), Value::Boolean(true));
        assert_eq!(ARG.le(1).apply(1.5f32).unwrap(), Value::Boolean(false));
        assert_eq!(ARG.equals("Joe").apply("Joe").unwrap(), Value::Boolean(true));
        assert_eq!(
            ARG.not_equals("Joe").apply("Mike").unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            ARG.equals(f64::NAN).apply(f64::NAN).unwrap(),
            Value::Boolean(false)
        );

        assert!(ARG.equals("Joe").apply(3).is_err());
    }

    #[test]
    fn test_equality_ignores_operand_order() {
        // A boolean compares in the number's type on either side
        for input in [0, 1, 5] {
            let left = ARG.equals(true).apply(input).unwrap();
            let right = Lambda::from(true).equals(ARG).apply(input).unwrap();
            assert_eq!(left, right);
            assert_eq!(left, Value::Boolean(input == 1));

            let left = ARG.lt(true).apply(input).unwrap();
            let right = Lambda::from(true).gt(ARG).apply(input).unwrap();
            assert_eq!(left, right);
        }

        // Types without a common one are rejected on either side
        assert!(ARG.equals("5").apply(5).is_err());
        assert!(Lambda::from("5").equals(ARG).apply(5).is_err());
    }

    #[test]
    fn test_stream_insert() {
        let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
        let sink = OutputSink::new(&buffer);

        let write_input = Lambda::binary(BinaryOperator::StreamInsert, sink.clone(), ARG);
        let lambda = Lambda::binary(
            BinaryOperator::StreamInsert,
            write_input,
            Directive::EndLine,
        );

        let result = lambda.apply(27).unwrap();
        assert_eq!(result, Value::Stream(sink));
        assert_eq!(buffer.borrow().as_slice(), b"27\n");
    }

    #[test]
    fn test_stream_insert_requires_stream() {
        let lambda = Lambda::binary(BinaryOperator::StreamInsert, ARG, 1);
        assert!(matches!(
            lambda.apply(1),
            Err(LambdaError::NotAStream {
                found: DataType::Integer
            })
        ));
    }

    #[test]
    fn test_evaluate_lambda_helper() {
        let lambda = Lambda::binary(BinaryOperator::Sub, ARG, 1);
        assert_eq!(evaluate_lambda(&lambda, 1).unwrap(), Value::Integer(0));
    }
}
