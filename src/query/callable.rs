//! Callables accepted by dataset operations.
//!
//! Both ordinary closures and [`Lambda`]s work wherever a dataset expects a
//! predicate or a projection. A lambda sees each element as a [`Value`], so
//! it applies to datasets whose elements convert into one.

use crate::expression::{Lambda, LambdaResult, Value};

/// Decides whether an element is kept by `filter`
pub trait Predicate<T> {
    fn test(&self, item: &T) -> LambdaResult<bool>;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, item: &T) -> LambdaResult<bool> {
        Ok(self(item))
    }
}

impl<T> Predicate<T> for Lambda
where
    T: Clone + Into<Value>,
{
    fn test(&self, item: &T) -> LambdaResult<bool> {
        let mut bound: Value = item.clone().into();
        let result = self.call(&mut bound)?;
        result.is_truthy()
    }
}

/// Maps an element to a derived value, used by `select`, `group` and as the
/// key of `order_by`
pub trait Projector<T, S> {
    fn project(&self, item: &T) -> LambdaResult<S>;
}

impl<T, S, F> Projector<T, S> for F
where
    F: Fn(&T) -> S,
{
    fn project(&self, item: &T) -> LambdaResult<S> {
        Ok(self(item))
    }
}

impl<T> Projector<T, Value> for Lambda
where
    T: Clone + Into<Value>,
{
    fn project(&self, item: &T) -> LambdaResult<Value> {
        let mut bound: Value = item.clone().into();
        self.call(&mut bound)
    }
}
