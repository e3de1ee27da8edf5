//! A priority queue that does no ordering work until asked.
//!
//! Inserts are a plain push. Every extraction scans the whole vector for the
//! lowest element and removes it with `swap_remove`.

use std::cmp::Ordering;

use heapq::Comparator;
use heapq::HeapError;
use heapq::NaturalOrder;
use heapq::PriorityQueue;

/// Priority queue backed by an unsorted `Vec`.
#[derive(Clone, Debug)]
pub struct LinearScanQueue<E, C = NaturalOrder> {
    elements: Vec<E>,
    comparator: C,
}

impl<E: Ord> LinearScanQueue<E, NaturalOrder> {
    pub fn new() -> LinearScanQueue<E, NaturalOrder> {
        return LinearScanQueue::with_comparator(NaturalOrder);
    }
}

impl<E, C: Comparator<E> + Default> Default for LinearScanQueue<E, C> {
    fn default() -> Self {
        return LinearScanQueue::with_comparator(C::default());
    }
}

impl<E, C: Comparator<E>> LinearScanQueue<E, C> {
    pub fn with_comparator(comparator: C) -> LinearScanQueue<E, C> {
        return LinearScanQueue {
            elements: Vec::new(),
            comparator,
        };
    }

    /// Index of the lowest element. Ties go to the earliest index.
    fn min_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, element) in self.elements.iter().enumerate() {
            match best {
                Some(b) if self.comparator.compare(element, &self.elements[b]) != Ordering::Less => {}
                _ => best = Some(i),
            }
        }
        return best;
    }
}

impl<E: Clone + PartialEq, C: Comparator<E>> PriorityQueue for LinearScanQueue<E, C> {
    type Item = E;

    fn insert(&mut self, item: E) {
        self.elements.push(item);
    }

    fn insert_all(&mut self, items: Vec<E>) {
        self.elements.extend(items);
    }

    fn peek(&self) -> Result<&E, HeapError> {
        return match self.min_index() {
            Some(i) => Ok(&self.elements[i]),
            None => Err(HeapError::EmptyContainer { operation: "peek" }),
        };
    }

    fn extract_min(&mut self) -> Result<E, HeapError> {
        return match self.min_index() {
            Some(i) => Ok(self.elements.swap_remove(i)),
            None => Err(HeapError::EmptyContainer {
                operation: "extract_min",
            }),
        };
    }

    fn remove(&mut self, item: &E) -> bool {
        match self.elements.iter().position(|e| e == item) {
            Some(i) => {
                self.elements.swap_remove(i);
                return true;
            }
            None => return false,
        }
    }

    fn contains(&self, item: &E) -> bool {
        return self.elements.contains(item);
    }

    fn remove_all(&mut self) -> Vec<E> {
        return std::mem::take(&mut self.elements);
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn to_sorted_list(&self) -> Vec<E> {
        let mut sorted = self.elements.clone();
        sorted.sort_by(|a, b| self.comparator.compare(a, b));
        return sorted;
    }

    fn len(&self) -> usize {
        return self.elements.len();
    }
}
