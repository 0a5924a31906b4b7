//! Query operations over in-memory collections.
//!
//! A [`Dataset`] wraps a shared collection and exposes `count`, `filter`
//! (`where`), `select`, `group` and `order_by`. Operations accept closures or
//! lambdas built in [`crate::expression`]. Two datasets are merged with
//! `insert(source).into(target, mode)`.

pub mod callable;
pub mod dataset;
pub mod insert;
pub mod sequence;
pub mod sort;

pub use callable::{Predicate, Projector};
pub use dataset::{from, Dataset};
pub use insert::{insert, Inserter, MutationMode};
pub use sequence::Sequence;
pub use sort::{selection_sort, SortOrder};
