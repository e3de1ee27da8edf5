//! Restoring the heap property after structural edits.
//!
//! The backing vector is an implicit binary tree: the children of index `i`
//! live at `2i + 1` and `2i + 2`, and its parent at `(i - 1) / 2`.
//!
//! Complexity:
//! - sift_up: O(log n)
//! - sift_down: O(log n)
//! - heapify: O(n)

use std::cmp::Ordering;

use crate::compare::Comparator;
use super::PriorityHeap;

impl<E, C: Comparator<E>> PriorityHeap<E, C> {
    /// Move the element at `index` toward the root until its parent does not
    /// compare greater. Returns the element's final index.
    pub(super) fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            let order = self.comparator.compare(&self.elements[index], &self.elements[parent]);
            if order != Ordering::Less {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
        return index;
    }

    /// Move the element at `index` toward the leaves, always swapping with
    /// the higher-priority child, until neither child compares lower.
    /// Returns the element's final index.
    pub(super) fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            if right < len {
                let child = match self.comparator.compare(&self.elements[left], &self.elements[right]) {
                    Ordering::Greater => right,
                    _ => left,
                };
                let order = self.comparator.compare(&self.elements[index], &self.elements[child]);
                if order != Ordering::Greater {
                    return index;
                }
                self.elements.swap(index, child);
                index = child;
                continue;
            }

            // At most one child left, and it must be a leaf.
            if left < len {
                let order = self.comparator.compare(&self.elements[index], &self.elements[left]);
                if order == Ordering::Greater {
                    self.elements.swap(index, left);
                    index = left;
                }
            }
            return index;
        }
    }

    /// Rebuild the heap property over the whole vector bottom-up, sifting
    /// every non-leaf down starting from the last one.
    pub(super) fn heapify(&mut self) {
        let len = self.elements.len();
        if len < 2 {
            return;
        }
        log::trace!("heapify: rebuilding {} elements", len);
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Remove the element at `index`, filling the hole with the last element
    /// and sifting it in whichever direction it belongs.
    pub(super) fn remove_at(&mut self, index: usize) -> E {
        let removed = self.elements.swap_remove(index);
        if index < self.elements.len() {
            // The replacement only needs to move down if it ranks below the
            // element it replaced; otherwise it can only move up.
            match self.comparator.compare(&self.elements[index], &removed) {
                Ordering::Greater => self.sift_down(index),
                _ => self.sift_up(index),
            };
        }
        self.version += 1;
        return removed;
    }
}
