//! Conversions into and out of a heap.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::compare::Comparator;
use crate::compare::NaturalOrder;
use super::PriorityHeap;

impl<E, C: Comparator<E>> PriorityHeap<E, C> {
    /// Every element in ascending priority order. The heap is unchanged.
    pub fn to_sorted_list(&self) -> Vec<E>
    where
        E: Clone,
    {
        let mut sorted = self.elements.clone();
        sorted.sort_by(|a, b| self.comparator.compare(a, b));
        return sorted;
    }

    /// Every distinct element in ascending priority order.
    ///
    /// Elements that are `==` to one already kept are dropped. Only elements
    /// that compare equal can be `==`, so each run of equal-priority elements
    /// is deduplicated on its own.
    pub fn to_ordered_set(&self) -> Vec<E>
    where
        E: Clone + PartialEq,
    {
        let sorted = self.to_sorted_list();
        let mut set: Vec<E> = Vec::with_capacity(sorted.len());
        let mut run_start = 0;

        for element in sorted {
            if let Some(last) = set.last() {
                if self.comparator.compare(last, &element) != Ordering::Equal {
                    run_start = set.len();
                }
            }
            if set[run_start..].contains(&element) {
                continue;
            }
            set.push(element);
        }

        return set;
    }

    /// Consume the heap, returning its elements in ascending priority order.
    pub fn into_sorted_vec(self) -> Vec<E> {
        let PriorityHeap { mut elements, comparator, .. } = self;
        elements.sort_by(|a, b| comparator.compare(a, b));
        return elements;
    }

    /// Consume the heap, returning its backing vector in heap order.
    pub fn into_vec(self) -> Vec<E> {
        return self.elements;
    }

    /// Consume the heap, yielding elements by repeated extraction.
    pub fn into_sorted_iter(self) -> IntoSortedIter<E, C> {
        return IntoSortedIter { heap: self };
    }
}

/// Owning iterator that extracts elements in priority order.
#[derive(Clone, Debug)]
pub struct IntoSortedIter<E, C> {
    heap: PriorityHeap<E, C>,
}

impl<E, C: Comparator<E>> Iterator for IntoSortedIter<E, C> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        return self.heap.pop();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        return (len, Some(len));
    }
}

impl<E, C: Comparator<E>> ExactSizeIterator for IntoSortedIter<E, C> {}

impl<E, C: Comparator<E>> FusedIterator for IntoSortedIter<E, C> {}

impl<E: Ord> From<Vec<E>> for PriorityHeap<E, NaturalOrder> {
    fn from(elements: Vec<E>) -> Self {
        return PriorityHeap::from_vec_with(elements, NaturalOrder);
    }
}

impl<E: Ord, const N: usize> From<[E; N]> for PriorityHeap<E, NaturalOrder> {
    fn from(elements: [E; N]) -> Self {
        return PriorityHeap::from(Vec::from(elements));
    }
}

impl<E: Ord> FromIterator<E> for PriorityHeap<E, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        return PriorityHeap::from(iter.into_iter().collect::<Vec<E>>());
    }
}

impl<E, C: Comparator<E>> Extend<E> for PriorityHeap<E, C> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, E: Copy + 'a, C: Comparator<E>> Extend<&'a E> for PriorityHeap<E, C> {
    fn extend<I: IntoIterator<Item = &'a E>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied());
    }
}

impl<E, C> IntoIterator for PriorityHeap<E, C> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    /// Consume the heap in internal heap order. Use `into_sorted_iter` for
    /// priority order.
    fn into_iter(self) -> std::vec::IntoIter<E> {
        return self.elements.into_iter();
    }
}
