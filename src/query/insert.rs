//! Merging one dataset into another.
//!
//! `insert(source).into(target, mode)` appends the source elements after the
//! target elements. The target may use a different container than the
//! source as long as the element type matches.

use crate::query::dataset::Dataset;
use crate::query::sequence::Sequence;
use anyhow::Result;
use log::debug;

/// How `into` treats the target collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationMode {
    /// Leave the target untouched and merge into a fresh collection
    #[default]
    Copy,
    /// Append onto the target collection itself
    InPlace,
}

/// Pending merge created by [`insert`]
pub struct Inserter<C: Sequence> {
    source: Dataset<C>,
}

/// Start merging `source` into another dataset
pub fn insert<C: Sequence>(source: Dataset<C>) -> Inserter<C> {
    Inserter { source }
}

impl<C> Inserter<C>
where
    C: Sequence,
    C::Item: Clone,
{
    /// Append the source elements to `target`.
    ///
    /// The result always holds the target elements followed by the source
    /// elements, both in their original order. With [`MutationMode::InPlace`]
    /// it shares the target's collection; with [`MutationMode::Copy`] it owns
    /// a new one.
    pub fn into<D>(self, target: Dataset<D>, mode: MutationMode) -> Result<Dataset<D>>
    where
        D: Sequence<Item = C::Item>,
    {
        // Snapshot first so merging a dataset into itself sees the original elements
        let incoming = self.source.to_vec()?;

        let merged = match mode {
            MutationMode::Copy => {
                let existing = target.read("insert")?;
                let mut fresh = D::default();
                for item in existing.elements() {
                    fresh.push_back(item.clone());
                }
                for item in incoming.iter().cloned() {
                    fresh.push_back(item);
                }
                Dataset::new(fresh)
            }
            MutationMode::InPlace => {
                {
                    let mut existing = target.write("insert")?;
                    for item in incoming.iter().cloned() {
                        existing.push_back(item);
                    }
                }
                target.clone()
            }
        };

        debug!("insert: appended {} elements ({:?})", incoming.len(), mode);
        Ok(merged)
    }
}
