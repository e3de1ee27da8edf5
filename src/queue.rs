//! The PriorityQueue trait defines the interface shared by every priority
//! queue in this workspace.
//!
//! `PriorityHeap` is the production implementation. The `pedagogy` crate
//! provides simpler reference queues behind the same trait so that a single
//! conformance suite and a single set of benchmarks can drive all of them.

use crate::compare::Comparator;
use crate::error::Result;
use crate::heap::PriorityHeap;

/// A min-priority queue: the element that compares lowest comes out first.
///
/// Implementors must agree on:
/// - `extract_min` always returns an element no greater than any remaining one
/// - `remove` deletes exactly one `==` occurrence
/// - `peek` and `extract_min` fail with `EmptyContainer` on an empty queue
pub trait PriorityQueue {
    type Item;

    /// Add a single element.
    fn insert(&mut self, item: Self::Item);

    /// Add a batch of elements.
    fn insert_all(&mut self, items: Vec<Self::Item>) {
        for item in items {
            self.insert(item);
        }
    }

    /// Borrow the highest-priority element.
    fn peek(&self) -> Result<&Self::Item>;

    /// Remove and return the highest-priority element.
    fn extract_min(&mut self) -> Result<Self::Item>;

    /// Remove one element equal to `item`.
    fn remove(&mut self, item: &Self::Item) -> bool;

    fn contains(&self, item: &Self::Item) -> bool;

    /// Remove and return every element, in any order.
    fn remove_all(&mut self) -> Vec<Self::Item>;

    fn clear(&mut self);

    /// Every element in ascending priority order.
    fn to_sorted_list(&self) -> Vec<Self::Item>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

impl<E: Clone + PartialEq, C: Comparator<E>> PriorityQueue for PriorityHeap<E, C> {
    type Item = E;

    fn insert(&mut self, item: E) {
        PriorityHeap::insert(self, item);
    }

    fn insert_all(&mut self, items: Vec<E>) {
        PriorityHeap::insert_all(self, items);
    }

    fn peek(&self) -> Result<&E> {
        return PriorityHeap::peek(self);
    }

    fn extract_min(&mut self) -> Result<E> {
        return PriorityHeap::extract_min(self);
    }

    fn remove(&mut self, item: &E) -> bool {
        return PriorityHeap::remove(self, item);
    }

    fn contains(&self, item: &E) -> bool {
        return PriorityHeap::contains(self, item);
    }

    fn remove_all(&mut self) -> Vec<E> {
        return PriorityHeap::remove_all(self);
    }

    fn clear(&mut self) {
        PriorityHeap::clear(self);
    }

    fn to_sorted_list(&self) -> Vec<E> {
        return PriorityHeap::to_sorted_list(self);
    }

    fn len(&self) -> usize {
        return PriorityHeap::len(self);
    }

    fn is_empty(&self) -> bool {
        return PriorityHeap::is_empty(self);
    }
}
