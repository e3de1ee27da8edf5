//! A priority queue that keeps its elements fully sorted.
//!
//! Every insert pays for a binary search plus a shift, so the queue always
//! answers "what comes next" by looking at index 0. Equal elements are kept
//! in insertion order, which makes this queue stable where a heap is not.

use std::cmp::Ordering;

use heapq::Comparator;
use heapq::HeapError;
use heapq::NaturalOrder;
use heapq::PriorityQueue;

/// Priority queue backed by a `Vec` in ascending order.
#[derive(Clone, Debug)]
pub struct SortedVecQueue<E, C = NaturalOrder> {
    elements: Vec<E>,
    comparator: C,
}

impl<E: Ord> SortedVecQueue<E, NaturalOrder> {
    pub fn new() -> SortedVecQueue<E, NaturalOrder> {
        return SortedVecQueue::with_comparator(NaturalOrder);
    }
}

impl<E, C: Comparator<E> + Default> Default for SortedVecQueue<E, C> {
    fn default() -> Self {
        return SortedVecQueue::with_comparator(C::default());
    }
}

impl<E, C: Comparator<E>> SortedVecQueue<E, C> {
    pub fn with_comparator(comparator: C) -> SortedVecQueue<E, C> {
        return SortedVecQueue {
            elements: Vec::new(),
            comparator,
        };
    }

    /// Elements in ascending order.
    pub fn as_slice(&self) -> &[E] {
        return &self.elements;
    }

    /// Index of the first element that compares equal to `item`, or where
    /// it would be inserted.
    fn lower_bound(&self, item: &E) -> usize {
        return self
            .elements
            .partition_point(|e| self.comparator.compare(e, item) == Ordering::Less);
    }

    fn find(&self, item: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        // Only the run of equal-priority elements can contain a match.
        let start = self.lower_bound(item);
        return self.elements[start..]
            .iter()
            .take_while(|e| self.comparator.compare(e, item) == Ordering::Equal)
            .position(|e| e == item)
            .map(|offset| start + offset);
    }
}

impl<E: Clone + PartialEq, C: Comparator<E>> PriorityQueue for SortedVecQueue<E, C> {
    type Item = E;

    fn insert(&mut self, item: E) {
        let at = self
            .elements
            .partition_point(|e| self.comparator.compare(e, &item) != Ordering::Greater);
        self.elements.insert(at, item);
    }

    fn peek(&self) -> Result<&E, HeapError> {
        return self
            .elements
            .first()
            .ok_or(HeapError::EmptyContainer { operation: "peek" });
    }

    fn extract_min(&mut self) -> Result<E, HeapError> {
        if self.elements.is_empty() {
            return Err(HeapError::EmptyContainer {
                operation: "extract_min",
            });
        }
        return Ok(self.elements.remove(0));
    }

    fn remove(&mut self, item: &E) -> bool {
        match self.find(item) {
            Some(index) => {
                self.elements.remove(index);
                return true;
            }
            None => return false,
        }
    }

    fn contains(&self, item: &E) -> bool {
        return self.find(item).is_some();
    }

    fn remove_all(&mut self) -> Vec<E> {
        return std::mem::take(&mut self.elements);
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn to_sorted_list(&self) -> Vec<E> {
        return self.elements.clone();
    }

    fn len(&self) -> usize {
        return self.elements.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_sorted() {
        let mut queue = SortedVecQueue::new();
        for value in [5, 3, 8, 1, 4] {
            queue.insert(value);
        }
        assert_eq!(queue.as_slice(), &[1, 3, 4, 5, 8]);
    }

    #[test]
    fn equal_priorities_keep_insertion_order() {
        let mut queue: SortedVecQueue<(u8, char), _> = SortedVecQueue::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
        queue.insert((1, 'b'));
        queue.insert((0, 'x'));
        queue.insert((1, 'c'));
        queue.insert((1, 'a'));
        assert_eq!(queue.as_slice(), &[(0, 'x'), (1, 'b'), (1, 'c'), (1, 'a')]);
    }

    #[test]
    fn remove_searches_equal_run() {
        let mut queue: SortedVecQueue<(u8, char), _> = SortedVecQueue::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
        queue.insert_all(vec![(1, 'a'), (1, 'b'), (2, 'c')]);
        assert!(queue.remove(&(1, 'b')));
        assert!(!queue.remove(&(1, 'z')));
        assert_eq!(queue.as_slice(), &[(1, 'a'), (2, 'c')]);
    }

    #[test]
    fn empty_queue_errors() {
        let mut queue: SortedVecQueue<i32> = SortedVecQueue::new();
        assert!(queue.peek().is_err());
        assert!(queue.extract_min().is_err());
    }
}
