//! Array-backed binary min-heap ordered by a comparator.
//!
//! The heap stores its elements in a single `Vec`, treated as an implicit
//! binary tree. For every parent/child pair the parent never compares greater
//! than the child, so the element that compares lowest is always at index 0.
//! Elements that compare equal may come out in any relative order.
//!
//! Complexity:
//! - insert: O(log n) amortized
//! - insert_all: O(n + k) or O(k log n), whichever is estimated cheaper
//! - peek: O(1)
//! - extract_min: O(log n)
//! - contains / remove: O(n) worst case, usually much less
//! - from_vec_with: O(n)
//! - remove_all / clear: O(1) / O(n)
//!
//! Every structural mutation bumps a version counter, which lets a detached
//! `UnorderedCursor` notice that the heap changed underneath it.
//!
//! A heap instance is not meant to be shared between threads while being
//! mutated; wrap it in a lock if that is needed.

mod convert;
mod cursor;
mod search;
mod sift;

pub use convert::IntoSortedIter;
pub use cursor::UnorderedCursor;
pub use cursor::UnorderedElements;

use crate::compare::Comparator;
use crate::compare::NaturalOrder;
use crate::config::BulkInsertPolicy;
use crate::config::BulkStrategy;
use crate::config::HeapConfig;
use crate::error::HeapError;
use crate::error::Result;

/// A binary min-heap over `E`, ordered by `C`.
#[derive(Clone)]
pub struct PriorityHeap<E, C = NaturalOrder> {
    /// Implicit binary tree in level order.
    elements: Vec<E>,
    comparator: C,
    /// Bumped on every structural mutation.
    version: u64,
    bulk_insert: BulkInsertPolicy,
}

impl<E: Ord> PriorityHeap<E, NaturalOrder> {
    /// Create an empty heap using the element's natural order.
    pub fn new() -> PriorityHeap<E, NaturalOrder> {
        return PriorityHeap::with_comparator(NaturalOrder);
    }

    /// Create an empty natural-order heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> PriorityHeap<E, NaturalOrder> {
        let config = HeapConfig::default().with_initial_capacity(capacity);
        return PriorityHeap::with_config(NaturalOrder, config);
    }
}

impl<E, C: Comparator<E>> PriorityHeap<E, C> {
    /// Create an empty heap ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> PriorityHeap<E, C> {
        return PriorityHeap::with_config(comparator, HeapConfig::default());
    }

    /// Create an empty heap ordered by `comparator` with explicit settings.
    pub fn with_config(comparator: C, config: HeapConfig) -> PriorityHeap<E, C> {
        return PriorityHeap {
            elements: Vec::with_capacity(config.initial_capacity),
            comparator,
            version: 0,
            bulk_insert: config.bulk_insert,
        };
    }

    /// Build a heap from an unordered vector in O(n), taking ownership of
    /// its elements.
    pub fn from_vec_with(elements: Vec<E>, comparator: C) -> PriorityHeap<E, C> {
        let mut heap = PriorityHeap::with_comparator(comparator);
        heap.elements = elements;
        heap.heapify();
        return heap;
    }

    /// Build a heap holding a copy of `elements` in O(n).
    pub fn from_slice_with(elements: &[E], comparator: C) -> PriorityHeap<E, C>
    where
        E: Clone,
    {
        return PriorityHeap::from_vec_with(elements.to_vec(), comparator);
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        return self.elements.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.elements.is_empty();
    }

    pub fn capacity(&self) -> usize {
        return self.elements.capacity();
    }

    /// Reserve room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit();
    }

    /// The current modification count.
    #[inline]
    pub fn version(&self) -> u64 {
        return self.version;
    }

    pub fn comparator(&self) -> &C {
        return &self.comparator;
    }

    pub fn bulk_insert_policy(&self) -> BulkInsertPolicy {
        return self.bulk_insert;
    }

    /// Add an element.
    pub fn insert(&mut self, element: E) {
        self.version += 1;
        self.elements.push(element);
        let last = self.elements.len() - 1;
        self.sift_up(last);
    }

    /// Add every element of `elements`.
    ///
    /// The batch is appended first, then the heap property is restored either
    /// by sifting each new element up or by rebuilding the whole heap,
    /// according to the heap's `BulkInsertPolicy`.
    pub fn insert_all<I: IntoIterator<Item = E>>(&mut self, elements: I) {
        let existing = self.elements.len();
        self.elements.extend(elements);
        let added = self.elements.len() - existing;
        if added == 0 {
            return;
        }
        self.version += 1;

        let strategy = self.bulk_insert.choose(existing, added);
        log::trace!(
            "insert_all: {} into {} using {:?}",
            added,
            existing,
            strategy
        );
        match strategy {
            BulkStrategy::Heapify => self.heapify(),
            BulkStrategy::SiftUp => {
                for index in existing..self.elements.len() {
                    self.sift_up(index);
                }
            }
        }
    }

    /// Borrow the highest-priority element.
    pub fn peek(&self) -> Result<&E> {
        return self
            .elements
            .first()
            .ok_or(HeapError::EmptyContainer { operation: "peek" });
    }

    /// Like `peek`, but returns `None` on an empty heap.
    pub fn first(&self) -> Option<&E> {
        return self.elements.first();
    }

    /// Remove and return the highest-priority element.
    pub fn extract_min(&mut self) -> Result<E> {
        if self.elements.is_empty() {
            return Err(HeapError::EmptyContainer {
                operation: "extract_min",
            });
        }
        return Ok(self.remove_at(0));
    }

    /// Like `extract_min`, but returns `None` on an empty heap.
    pub fn pop(&mut self) -> Option<E> {
        return self.extract_min().ok();
    }

    /// Remove one element equal to `target`. Returns whether one was found.
    pub fn remove(&mut self, target: &E) -> bool
    where
        E: PartialEq,
    {
        match self.locate(target) {
            Some(index) => {
                self.remove_at(index);
                return true;
            }
            None => return false,
        }
    }

    /// Whether an element equal to `target` is stored.
    pub fn contains(&self, target: &E) -> bool
    where
        E: PartialEq,
    {
        return self.locate(target).is_some();
    }

    /// Remove and return every element, in no particular order.
    pub fn remove_all(&mut self) -> Vec<E> {
        self.version += 1;
        return std::mem::take(&mut self.elements);
    }

    /// Remove every element. The heap keeps its allocation.
    pub fn clear(&mut self) {
        self.version += 1;
        self.elements.clear();
    }

    /// Keep only the elements for which `keep` returns true.
    pub fn retain<F: FnMut(&E) -> bool>(&mut self, keep: F) {
        let before = self.elements.len();
        self.elements.retain(keep);
        if self.elements.len() != before {
            self.version += 1;
            self.heapify();
        }
    }

    /// Move every element of `other` into this heap, leaving `other` empty.
    pub fn append(&mut self, other: &mut PriorityHeap<E, C>) {
        if other.is_empty() {
            return;
        }
        let batch = other.remove_all();
        self.insert_all(batch);
    }

    /// Copy of every element in internal heap order.
    pub fn to_unordered_list(&self) -> Vec<E>
    where
        E: Clone,
    {
        return self.elements.clone();
    }

    /// Same as `to_unordered_list`.
    pub fn snapshot_elements(&self) -> Vec<E>
    where
        E: Clone,
    {
        return self.to_unordered_list();
    }

    /// Borrow the backing storage in internal heap order.
    pub fn as_slice(&self) -> &[E] {
        return &self.elements;
    }

    /// Find the first parent/child pair that breaks the heap property.
    #[doc(hidden)]
    pub fn check_invariant(&self) -> std::result::Result<(), (usize, usize)> {
        for child in 1..self.elements.len() {
            let parent = (child - 1) / 2;
            let order = self.comparator.compare(&self.elements[parent], &self.elements[child]);
            if order == std::cmp::Ordering::Greater {
                return Err((parent, child));
            }
        }
        return Ok(());
    }
}

impl<E, C: Comparator<E> + Default> Default for PriorityHeap<E, C> {
    fn default() -> Self {
        return PriorityHeap::with_comparator(C::default());
    }
}

impl<E: std::fmt::Debug, C> std::fmt::Debug for PriorityHeap<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f
            .debug_struct("PriorityHeap")
            .field("len", &self.elements.len())
            .field("version", &self.version)
            .field("elements", &self.elements)
            .finish();
    }
}
