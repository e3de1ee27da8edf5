//! Unordered traversal over a heap's elements.
//!
//! `UnorderedElements` borrows the heap, so the borrow checker already rules
//! out mutation while it is alive.
//!
//! `UnorderedCursor` holds no borrow between steps. It records the heap's
//! version when created and checks it on every step; if the heap was
//! structurally modified in between, the step fails with
//! `HeapError::ConcurrentModification` and the cursor yields nothing after.
//! This catches misuse, it does not make a heap safe to share across threads.

use std::iter::FusedIterator;

use crate::error::HeapError;
use crate::error::Result;
use super::PriorityHeap;

/// Borrowing iterator over elements in internal heap order.
#[derive(Clone, Debug)]
pub struct UnorderedElements<'a, E> {
    inner: std::slice::Iter<'a, E>,
}

impl<'a, E> Iterator for UnorderedElements<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<&'a E> {
        return self.inner.next();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return self.inner.size_hint();
    }
}

impl<E> ExactSizeIterator for UnorderedElements<'_, E> {}

impl<E> FusedIterator for UnorderedElements<'_, E> {}

/// A detached position in an unordered traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnorderedCursor {
    /// Heap version captured at the start of the traversal.
    version: u64,
    index: usize,
    finished: bool,
}

impl UnorderedCursor {
    /// Advance the traversal over `heap`.
    ///
    /// Returns `None` once every element has been visited, or after a
    /// modification has been reported.
    pub fn next<'h, E, C>(&mut self, heap: &'h PriorityHeap<E, C>) -> Option<Result<&'h E>> {
        if self.finished {
            return None;
        }

        if heap.version != self.version {
            self.finished = true;
            log::debug!(
                "cursor: heap changed from version {} to {} at index {}",
                self.version,
                heap.version,
                self.index
            );
            return Some(Err(HeapError::ConcurrentModification {
                expected: self.version,
                found: heap.version,
            }));
        }

        match heap.elements.get(self.index) {
            Some(element) => {
                self.index += 1;
                return Some(Ok(element));
            }
            None => {
                self.finished = true;
                return None;
            }
        }
    }

    /// Number of elements visited so far.
    pub fn position(&self) -> usize {
        return self.index;
    }

    /// The heap version this cursor is bound to.
    pub fn version(&self) -> u64 {
        return self.version;
    }

    pub fn is_finished(&self) -> bool {
        return self.finished;
    }
}

impl<E, C> PriorityHeap<E, C> {
    /// Iterate over elements in internal heap order.
    pub fn unordered_elements(&self) -> UnorderedElements<'_, E> {
        return UnorderedElements {
            inner: self.elements.iter(),
        };
    }

    /// Start a version-checked traversal that does not borrow the heap.
    pub fn unordered_cursor(&self) -> UnorderedCursor {
        return UnorderedCursor {
            version: self.version,
            index: 0,
            finished: false,
        };
    }
}

impl<'a, E, C> IntoIterator for &'a PriorityHeap<E, C> {
    type Item = &'a E;
    type IntoIter = UnorderedElements<'a, E>;

    fn into_iter(self) -> UnorderedElements<'a, E> {
        return self.unordered_elements();
    }
}
