//! Backing containers a dataset can wrap.

use std::collections::VecDeque;

/// An ordered, indexable, appendable collection.
///
/// `Default` produces the empty collection that producing operations fill.
pub trait Sequence: Default {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `None` when out of range
    fn at(&self, index: usize) -> Option<&Self::Item>;

    /// Append one element at the end
    fn push_back(&mut self, item: Self::Item);

    /// Swap the elements at `a` and `b` in place
    fn exchange(&mut self, a: usize, b: usize);

    /// Iterate in order
    fn elements(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_>;
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn push_back(&mut self, item: T) {
        self.push(item);
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }

    fn exchange(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}
