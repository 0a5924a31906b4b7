//! Lambda nodes and the envelope that wraps them.

use crate::expression::operator::BinaryOperator;
use crate::expression::sink::{Directive, OutputSink};
use crate::expression::value::Value;
use std::fmt;

/// Lambda tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The input bound at evaluation time
    Placeholder,

    /// Constant value, ignores the input
    Literal(Value),

    /// Output destination, ignores the input
    Sink(OutputSink),

    /// Binary operation over two owned children
    Binary {
        op: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Create a binary operation node
    pub fn binary(op: BinaryOperator, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Check if this node never reads the bound input
    pub fn is_constant(&self) -> bool {
        match self {
            Node::Placeholder => false,
            Node::Literal(_) | Node::Sink(_) => true,
            Node::Binary { left, right, .. } => left.is_constant() && right.is_constant(),
        }
    }

    /// Check if evaluating this node yields the bound input itself
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            Node::Placeholder
                | Node::Binary {
                    op: BinaryOperator::Assign,
                    ..
                }
        )
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Placeholder => f.write_str("_1"),
            Node::Literal(Value::Text(s)) => write!(f, "{:?}", s),
            Node::Literal(value) => write!(f, "{}", value),
            Node::Sink(_) => f.write_str("<stream>"),
            Node::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op.as_str(), right)
            }
        }
    }
}

/// A deferred computation over one input value.
///
/// Every node kind is wrapped in the same envelope so lambdas of any shape
/// compose through the operator overloads in [`crate::expression::ops`].
/// Nothing is evaluated until [`Lambda::evaluate`] (or one of its
/// conveniences) is called with an input.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    root: Node,
}

impl Lambda {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Wrap a constant
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::new(Node::Literal(value.into()))
    }

    /// Wrap an output destination
    pub fn sink(sink: OutputSink) -> Self {
        Self::new(Node::Sink(sink))
    }

    /// Combine two lambdas with `op`
    pub fn binary(op: BinaryOperator, left: impl Into<Lambda>, right: impl Into<Lambda>) -> Self {
        Self::new(Node::binary(
            op,
            left.into().into_root(),
            right.into().into_root(),
        ))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn is_constant(&self) -> bool {
        self.root.is_constant()
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

/// The placeholder envelope.
///
/// Unlike a general [`Lambda`] it hands out a mutable reference to the bound
/// input and is the only assignable expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placeholder;

/// The well-known placeholder, standing for the value supplied at evaluation
pub const ARG: Placeholder = Placeholder;

impl Placeholder {
    /// Identity over the bound input
    pub fn evaluate<'a>(&self, input: &'a mut Value) -> &'a mut Value {
        input
    }

    /// Build `_1 = rhs`.
    ///
    /// Evaluating the result stores `rhs`, converted to the input's type, into
    /// the input and yields the input again.
    pub fn assign(self, rhs: impl Into<Lambda>) -> Lambda {
        Lambda::binary(BinaryOperator::Assign, self, rhs)
    }
}

/// Comparison builders shared by lambdas and the placeholder
pub trait Compare: Into<Lambda> + Sized {
    fn lt(self, rhs: impl Into<Lambda>) -> Lambda {
        Lambda::binary(BinaryOperator::Lt, self, rhs)
    }

    fn le(self, rhs: impl Into<Lambda>) -> Lambda {
        Lambda::binary(BinaryOperator::Le, self, rhs)
    }

    fn gt(self, rhs: impl Into<Lambda>) -> Lambda {
        Lambda::binary(BinaryOperator::Gt, self, rhs)
    }

    fn ge(self, rhs: impl Into<Lambda>) -> Lambda {
        Lambda::binary(BinaryOperator::Ge, self, rhs)
    }

    fn equals(self, rhs: impl Into<Lambda>) -> Lambda {
        Lambda::binary(BinaryOperator::Eq, self, rhs)
    }

    fn not_equals(self, rhs: impl Into<Lambda>) -> Lambda {
        Lambda::binary(BinaryOperator::Ne, self, rhs)
    }
}

impl Compare for Lambda {}
impl Compare for Placeholder {}

impl From<Node> for Lambda {
    fn from(root: Node) -> Self {
        Lambda::new(root)
    }
}

impl From<Placeholder> for Lambda {
    fn from(_: Placeholder) -> Self {
        Lambda::new(Node::Placeholder)
    }
}

impl From<OutputSink> for Lambda {
    fn from(sink: OutputSink) -> Self {
        Lambda::sink(sink)
    }
}

impl From<Value> for Lambda {
    fn from(value: Value) -> Self {
        Lambda::literal(value)
    }
}

macro_rules! impl_literal_lambda {
    ($($lit:ty),*) => {
        $(
            impl From<$lit> for Lambda {
                fn from(value: $lit) -> Self {
                    Lambda::literal(value)
                }
            }
        )*
    };
}

impl_literal_lambda!(i32, f32, f64, bool, &str, String, Directive);
