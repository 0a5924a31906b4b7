//! Deferred single-argument expressions.
//!
//! This module provides:
//! - Lambda trees built from a placeholder, literals and output sinks
//! - Operator overloads that compose lambdas without evaluating them
//! - Type promotion and type checking
//! - Evaluation against a bound, mutable input

pub mod error;
pub mod eval;
pub mod expr;
pub mod operator;
pub mod ops;
pub mod promote;
pub mod sink;
pub mod type_checker;
pub mod value;

pub use error::{LambdaError, LambdaResult};
pub use eval::{evaluate_binary_op, evaluate_node, Evaluated};
pub use expr::{Compare, Lambda, Node, Placeholder, ARG};
pub use operator::BinaryOperator;
pub use promote::promote;
pub use sink::{Directive, OutputSink};
pub use type_checker::{type_check_lambda, TypeChecker};
pub use value::{DataType, Value};
