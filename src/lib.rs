//! Deferred lambda expressions and query operations over in-memory
//! collections.
//!
//! ```
//! use lambda_linq::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ages = Dataset::new(vec![32, 28, 27]);
//! let older = ages.filter(ARG.gt(30))?;
//! assert_eq!(older.count()?, 1);
//!
//! let doubled = ages.select(ARG * 2)?;
//! assert_eq!(doubled.to_vec()?, vec![Value::Integer(64), Value::Integer(56), Value::Integer(54)]);
//! # Ok(())
//! # }
//! ```

pub mod expression;
pub mod query;

pub mod prelude {
    pub use crate::expression::{
        Compare, DataType, Directive, Lambda, LambdaError, OutputSink, Value, ARG,
    };
    pub use crate::query::{
        from, insert, Dataset, MutationMode, Predicate, Projector, Sequence, SortOrder,
    };
}
