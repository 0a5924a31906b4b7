//! Query dataset over a shared collection handle.

use crate::query::callable::{Predicate, Projector};
use crate::query::sequence::Sequence;
use crate::query::sort::{selection_sort, SortOrder};
use anyhow::{anyhow, Context, Result};
use log::debug;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A collection exposed to query operations.
///
/// The dataset holds a reference-counted handle, so cloning a dataset or
/// building one with [`from`] shares the collection. `filter`, `select` and
/// `group` allocate a fresh collection; `order_by` reorders the shared one,
/// which every dataset over the same handle observes.
pub struct Dataset<C: Sequence> {
    handle: Rc<RefCell<C>>,
}

/// Dataset over a collection owned elsewhere; nothing is copied
pub fn from<C: Sequence>(handle: &Rc<RefCell<C>>) -> Dataset<C> {
    Dataset::from_shared(Rc::clone(handle))
}

impl<C: Sequence> Dataset<C> {
    /// Dataset that exclusively owns `container`
    pub fn new(container: C) -> Self {
        Self::from_shared(Rc::new(RefCell::new(container)))
    }

    pub fn from_shared(handle: Rc<RefCell<C>>) -> Self {
        Self { handle }
    }

    /// The underlying collection handle
    pub fn get(&self) -> Rc<RefCell<C>> {
        Rc::clone(&self.handle)
    }

    /// Whether both datasets wrap the very same collection
    pub fn shares_storage_with<D: Sequence>(&self, other: &Dataset<D>) -> bool {
        Rc::as_ptr(&self.handle) as *const () == Rc::as_ptr(&other.handle) as *const ()
    }

    pub(crate) fn read(&self, operation: &str) -> Result<Ref<'_, C>> {
        self.handle
            .try_borrow()
            .map_err(|_| anyhow!("{}: collection is being modified", operation))
    }

    pub(crate) fn write(&self, operation: &str) -> Result<RefMut<'_, C>> {
        self.handle
            .try_borrow_mut()
            .map_err(|_| anyhow!("{}: collection is already borrowed", operation))
    }

    /// Number of elements
    pub fn count(&self) -> Result<usize> {
        Ok(self.read("count")?.len())
    }

    /// Keep the elements `predicate` accepts, in their original order.
    ///
    /// This is the query `where`; the result owns a fresh collection of the
    /// same kind.
    #[doc(alias = "where")]
    pub fn filter<P>(&self, predicate: P) -> Result<Self>
    where
        P: Predicate<C::Item>,
        C::Item: Clone,
    {
        let source = self.read("filter")?;
        let mut kept = C::default();
        for (index, item) in source.elements().enumerate() {
            let accepted = predicate
                .test(item)
                .with_context(|| format!("filter: predicate failed on element {}", index))?;
            if accepted {
                kept.push_back(item.clone());
            }
        }

        debug!("filter: kept {} of {} elements", kept.len(), source.len());
        Ok(Self::new(kept))
    }

    /// Map every element through `projector` into a fresh `Vec`
    pub fn select<S, P>(&self, projector: P) -> Result<Dataset<Vec<S>>>
    where
        P: Projector<C::Item, S>,
    {
        let source = self.read("select")?;
        let projected = source
            .elements()
            .enumerate()
            .map(|(index, item)| {
                projector
                    .project(item)
                    .with_context(|| format!("select: projection failed on element {}", index))
            })
            .collect::<Result<Vec<S>>>()?;

        debug!("select: projected {} elements", projected.len());
        Ok(Dataset::new(projected))
    }

    /// Same as [`Dataset::select`]; no bucketing takes place
    pub fn group<S, P>(&self, key: P) -> Result<Dataset<Vec<S>>>
    where
        P: Projector<C::Item, S>,
    {
        self.select(key)
    }

    /// Reorder the collection in place by `key`.
    ///
    /// The returned dataset shares this dataset's collection.
    pub fn order_by<K, P>(&self, key: P, order: SortOrder) -> Result<Self>
    where
        K: PartialOrd,
        P: Projector<C::Item, K>,
    {
        let mut container = self.write("order_by")?;
        let exchanges = selection_sort(&mut *container, &key, order)
            .context("order_by: key failed")?;

        debug!(
            "order_by: {:?} over {} elements, {} exchanges",
            order,
            container.len(),
            exchanges
        );
        Ok(self.clone())
    }

    /// [`Dataset::order_by`] with the default order
    pub fn order_by_default<K, P>(&self, key: P) -> Result<Self>
    where
        K: PartialOrd,
        P: Projector<C::Item, K>,
    {
        self.order_by(key, SortOrder::default())
    }

    /// Copy the elements out in order
    pub fn to_vec(&self) -> Result<Vec<C::Item>>
    where
        C::Item: Clone,
    {
        Ok(self.read("to_vec")?.elements().cloned().collect())
    }
}

impl<C: Sequence> Clone for Dataset<C> {
    fn clone(&self) -> Self {
        Self::from_shared(Rc::clone(&self.handle))
    }
}

impl<C: Sequence + std::fmt::Debug> std::fmt::Debug for Dataset<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dataset").field("handle", &self.handle).finish()
    }
}

impl<T> FromIterator<T> for Dataset<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}
