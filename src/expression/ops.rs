//! Operator overloads that build lambdas.
//!
//! Every arithmetic operator gets three construction paths:
//!
//! - `lambda ⊕ lambda` and `lambda ⊕ literal`, through one impl over
//!   `R: Into<Lambda>` (literals become literal nodes via `From`)
//! - `literal ⊕ lambda`, generated per primitive literal type
//!
//! `<<` composes stream output: `sink << ARG << " " << ARG * 2 << Directive::EndLine`.
//! All of these only construct; nothing runs until the lambda is evaluated.

use crate::expression::expr::{Lambda, Placeholder};
use crate::expression::operator::BinaryOperator;
use crate::expression::sink::OutputSink;
use std::ops::{Add, Div, Mul, Shl, Sub};

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<R: Into<Lambda>> $trait<R> for Lambda {
            type Output = Lambda;

            fn $method(self, rhs: R) -> Lambda {
                Lambda::binary($op, self, rhs)
            }
        }

        impl<R: Into<Lambda>> $trait<R> for Placeholder {
            type Output = Lambda;

            fn $method(self, rhs: R) -> Lambda {
                Lambda::binary($op, self, rhs)
            }
        }

        impl_binary_operator!(@literal $trait, $method, $op, i32, f32, f64);
    };

    (@literal $trait:ident, $method:ident, $op:expr, $($lit:ty),*) => {
        $(
            impl $trait<Lambda> for $lit {
                type Output = Lambda;

                fn $method(self, rhs: Lambda) -> Lambda {
                    Lambda::binary($op, self, rhs)
                }
            }

            impl $trait<Placeholder> for $lit {
                type Output = Lambda;

                fn $method(self, rhs: Placeholder) -> Lambda {
                    Lambda::binary($op, self, rhs)
                }
            }
        )*
    };
}

impl_binary_operator!(Add, add, BinaryOperator::Add);
impl_binary_operator!(Sub, sub, BinaryOperator::Sub);
impl_binary_operator!(Mul, mul, BinaryOperator::Mul);
impl_binary_operator!(Div, div, BinaryOperator::Div);

impl<R: Into<Lambda>> Shl<R> for Lambda {
    type Output = Lambda;

    fn shl(self, rhs: R) -> Lambda {
        Lambda::binary(BinaryOperator::StreamInsert, self, rhs)
    }
}

impl<R: Into<Lambda>> Shl<R> for OutputSink {
    type Output = Lambda;

    fn shl(self, rhs: R) -> Lambda {
        Lambda::binary(BinaryOperator::StreamInsert, self, rhs)
    }
}

impl<R: Into<Lambda>> Shl<R> for &OutputSink {
    type Output = Lambda;

    fn shl(self, rhs: R) -> Lambda {
        Lambda::binary(BinaryOperator::StreamInsert, self.clone(), rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::expression::eval::Evaluated;
    use crate::expression::expr::{Compare, Lambda, Node, ARG};
    use crate::expression::operator::BinaryOperator;
    use crate::expression::sink::{Directive, OutputSink};
    use crate::expression::value::{DataType, Value};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_three_construction_paths() {
        // lambda + lambda
        let both = (ARG + 1) + (ARG * 2);
        assert_eq!(both.apply(3).unwrap(), Value::Integer(10));

        // lambda + literal
        let right_literal = ARG - 4;
        assert_eq!(right_literal.apply(10).unwrap(), Value::Integer(6));

        // literal + lambda
        let left_literal = 100 / (ARG + 0);
        assert_eq!(left_literal.apply(20).unwrap(), Value::Integer(5));
        let left_literal = 1.5f64 * ARG;
        assert_eq!(left_literal.apply(2).unwrap().as_f64(), Some(3.0));
    }

    #[test]
    fn test_operators_only_build() {
        let lambda = ARG / 0;
        assert_eq!(
            lambda.root(),
            &Node::binary(
                BinaryOperator::Div,
                Node::Placeholder,
                Node::Literal(Value::Integer(0))
            )
        );
        // Failure only surfaces once evaluated
        assert!(lambda.apply(1).is_err());
    }

    #[test]
    fn test_mixed_literal_types_promote() {
        let lambda = ARG * 2 + 0.5f32;
        let result = lambda.apply(3).unwrap();
        assert_eq!(result.data_type(), DataType::Real32);
        assert_eq!(result.as_f64(), Some(6.5));

        assert_eq!(
            lambda.result_type(DataType::Real64).unwrap(),
            DataType::Real64
        );
    }

    #[test]
    fn test_assignment_composes() {
        let lambda = ARG.assign(ARG * ARG + 1);
        let mut input = Value::Integer(4);
        let result = lambda.evaluate(&mut input).unwrap();
        assert!(matches!(result, Evaluated::Bound(_)));
        assert_eq!(input, Value::Integer(17));
    }

    #[test]
    fn test_stream_chain() {
        let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
        let out = OutputSink::new(&buffer);

        let lambda = &out << "value=" << ARG << " doubled=" << ARG * 2 << Directive::EndLine;
        // Building writes nothing
        assert!(buffer.borrow().is_empty());

        lambda.apply(21).unwrap();
        lambda.apply(1.5f64).unwrap();

        let written = String::from_utf8(buffer.borrow().clone()).unwrap();
        assert_eq!(written, "value=21 doubled=42\nvalue=1.5 doubled=3\n");
    }

    #[test]
    fn test_stream_chain_with_comparison() {
        let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
        let lambda = OutputSink::new(&buffer) << ARG.gt(30) << Directive::Flush;

        lambda.apply(32).unwrap();
        lambda.apply(18).unwrap();

        assert_eq!(buffer.borrow().as_slice(), b"truefalse");
    }

    #[test]
    fn test_cloned_lambdas_are_independent() {
        let base = ARG + 1;
        let doubled = base.clone() * 2;
        assert_eq!(base.apply(1).unwrap(), Value::Integer(2));
        assert_eq!(doubled.apply(1).unwrap(), Value::Integer(4));
        assert_eq!(Lambda::from(ARG).apply(8).unwrap(), Value::Integer(8));
    }
}
