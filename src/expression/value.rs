use crate::expression::error::{LambdaError, LambdaResult};
use crate::expression::promote::comparison_type;
use crate::expression::sink::{Directive, OutputSink};
use std::cmp::Ordering;
use std::fmt;

/// Semantic types a lambda value can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer,
    Real32,
    Real64,
    Boolean,
    Text,
    Stream,
    Directive,
}

impl DataType {
    /// Every type, in declaration order
    pub const ALL: [DataType; 7] = [
        DataType::Integer,
        DataType::Real32,
        DataType::Real64,
        DataType::Boolean,
        DataType::Text,
        DataType::Stream,
        DataType::Directive,
    ];

    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Real32 | DataType::Real64)
    }

    /// Whether [`Value::cast`] can turn a value of this type into `target`
    pub fn can_cast_to(&self, target: DataType) -> bool {
        let scalar = |t: DataType| t.is_numeric() || t == DataType::Boolean;
        *self == target || (scalar(*self) && scalar(target))
    }
}

/// Values flowing through a lambda
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i32),
    Real32(f32),
    Real64(f64),
    Boolean(bool),
    Text(String),
    Stream(OutputSink),
    Directive(Directive),
}

impl Value {
    /// Get the data type of this value
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Integer(_) => DataType::Integer,
            Value::Real32(_) => DataType::Real32,
            Value::Real64(_) => DataType::Real64,
            Value::Boolean(_) => DataType::Boolean,
            Value::Text(_) => DataType::Text,
            Value::Stream(_) => DataType::Stream,
            Value::Directive(_) => DataType::Directive,
        }
    }

    /// Convert this value to `target`.
    ///
    /// Numeric types convert between each other with `as` semantics and to
    /// and from `Boolean` (non-zero is `true`). Every other conversion between
    /// distinct types is a [`LambdaError::TypeMismatch`].
    pub fn cast(self, target: DataType) -> LambdaResult<Value> {
        let actual = self.data_type();
        if actual == target {
            return Ok(self);
        }

        let converted = match (self, target) {
            (Value::Integer(v), DataType::Real32) => Value::Real32(v as f32),
            (Value::Integer(v), DataType::Real64) => Value::Real64(v as f64),
            (Value::Integer(v), DataType::Boolean) => Value::Boolean(v != 0),
            (Value::Real32(v), DataType::Integer) => Value::Integer(v as i32),
            (Value::Real32(v), DataType::Real64) => Value::Real64(v as f64),
            (Value::Real32(v), DataType::Boolean) => Value::Boolean(v != 0.0),
            (Value::Real64(v), DataType::Integer) => Value::Integer(v as i32),
            (Value::Real64(v), DataType::Real32) => Value::Real32(v as f32),
            (Value::Real64(v), DataType::Boolean) => Value::Boolean(v != 0.0),
            (Value::Boolean(b), DataType::Integer) => Value::Integer(i32::from(b)),
            (Value::Boolean(b), DataType::Real32) => Value::Real32(if b { 1.0 } else { 0.0 }),
            (Value::Boolean(b), DataType::Real64) => Value::Real64(if b { 1.0 } else { 0.0 }),
            _ => {
                return Err(LambdaError::TypeMismatch {
                    expected: target,
                    actual,
                    context: "value conversion".to_string(),
                })
            }
        };
        Ok(converted)
    }

    /// Truthiness used when a value decides a filter: booleans as is,
    /// numbers when non-zero.
    pub fn is_truthy(&self) -> LambdaResult<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            Value::Integer(v) => Ok(*v != 0),
            Value::Real32(v) => Ok(*v != 0.0),
            Value::Real64(v) => Ok(*v != 0.0),
            other => Err(LambdaError::TypeMismatch {
                expected: DataType::Boolean,
                actual: other.data_type(),
                context: "predicate".to_string(),
            }),
        }
    }

    /// Order two values after converting both to their common comparison type.
    ///
    /// Symmetric in its operands. Returns `None` when the values have no
    /// common type or the common type has no ordering (streams, distinct
    /// directives, NaN).
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        if self.data_type() == other.data_type() {
            return Self::compare_same_type(self, other);
        }

        let common = comparison_type(self.data_type(), other.data_type())?;
        let left = self.clone().cast(common).ok()?;
        let right = other.clone().cast(common).ok()?;
        Self::compare_same_type(&left, &right)
    }

    fn compare_same_type(left: &Value, right: &Value) -> Option<Ordering> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Real32(a), Value::Real32(b)) => a.partial_cmp(b),
            (Value::Real64(a), Value::Real64(b)) => a.partial_cmp(b),
            (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Directive(a), Value::Directive(b)) if a == b => Some(Ordering::Equal),
            (Value::Stream(a), Value::Stream(b)) if a.same_destination(b) => {
                Some(Ordering::Equal)
            }
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Real32(v) => Some(*v as f64),
            Value::Real64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

// Equality converts across types, so `Integer(2) == Real64(2.0)`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Real32(v) => write!(f, "{}", v),
            Value::Real64(v) => write!(f, "{}", v),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Text(s) => f.write_str(s),
            Value::Stream(_) => f.write_str("<stream>"),
            Value::Directive(d) => write!(f, "{}", d),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Real32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Directive> for Value {
    fn from(v: Directive) -> Self {
        Value::Directive(v)
    }
}

impl From<OutputSink> for Value {
    fn from(v: OutputSink) -> Self {
        Value::Stream(v)
    }
}
