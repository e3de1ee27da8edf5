//! Heap-ordered search for a specific element.
//!
//! Positions are numbered from 1 at the root so the walk can use shifts: the
//! children of position `p` are `2p` and `2p + 1`, and its parent is `p >> 1`.
//!
//! The walk is a pre-order traversal that prunes any subtree whose root
//! already compares greater than the target. Every descendant of such a root
//! compares greater too, so none of them can be equal to the target.
//! Worst case O(n), since equal-priority elements can fill the whole heap.

use std::cmp::Ordering;

use crate::compare::Comparator;
use super::PriorityHeap;

impl<E: PartialEq, C: Comparator<E>> PriorityHeap<E, C> {
    /// Find the index of an element equal to `target`, if any.
    pub(super) fn locate(&self, target: &E) -> Option<usize> {
        let len = self.elements.len();
        if len == 0 {
            return None;
        }

        let mut position = 1usize;
        loop {
            let element = &self.elements[position - 1];
            let order = self.comparator.compare(element, target);

            if order != Ordering::Greater {
                if order == Ordering::Equal && element == target {
                    return Some(position - 1);
                }
                let left = position * 2;
                if left <= len {
                    position = left;
                    continue;
                }
            }

            // Climb while we are a right child, then step to the right
            // sibling. Repeat if that sibling is past the end, which only
            // happens when the last element is a left child.
            loop {
                while position & 1 == 1 {
                    position >>= 1;
                }
                position += 1;
                if position <= len {
                    break;
                }
            }

            // Climbing out of the root lands back on position 1.
            if position == 1 {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::heap::PriorityHeap;

    #[test]
    fn empty_heap_finds_nothing() {
        let heap: PriorityHeap<i32> = PriorityHeap::new();
        assert_eq!(heap.locate(&1), None);
    }

    #[test]
    fn finds_every_present_element() {
        let heap = PriorityHeap::from(vec![5, 3, 8, 1, 4, 9, 2, 7, 6]);
        for value in 1..=9 {
            let index = heap.locate(&value).expect("value is present");
            assert_eq!(heap.elements[index], value);
        }
    }

    #[test]
    fn misses_absent_elements() {
        let heap = PriorityHeap::from(vec![2, 4, 6, 8]);
        assert_eq!(heap.locate(&0), None);
        assert_eq!(heap.locate(&5), None);
        assert_eq!(heap.locate(&9), None);
    }

    #[test]
    fn finds_equal_among_same_priority() {
        // Pairs compare by the first field only; equality needs both.
        let by_priority = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
        let heap = PriorityHeap::from_vec_with(
            vec![(1, 'a'), (1, 'b'), (1, 'c'), (1, 'd'), (1, 'e')],
            by_priority,
        );
        for name in ['a', 'b', 'c', 'd', 'e'] {
            assert!(heap.locate(&(1, name)).is_some());
        }
        assert_eq!(heap.locate(&(1, 'z')), None);
    }

    #[test]
    fn prunes_subtrees_ranked_below_target() {
        let comparisons = Cell::new(0usize);
        let counting = |a: &u32, b: &u32| {
            comparisons.set(comparisons.get() + 1);
            return a.cmp(b);
        };
        let heap = PriorityHeap::from_vec_with((0..1023).map(|i| i * 2).collect(), counting);

        comparisons.set(0);
        assert_eq!(heap.locate(&0), Some(0));
        assert_eq!(comparisons.get(), 1);

        // 0 and 2 are visited; 6, 8 and 4 are each rejected without descending.
        comparisons.set(0);
        assert_eq!(heap.locate(&3), None);
        assert_eq!(comparisons.get(), 5);

        // Nothing ranks below the target, so every node is visited.
        comparisons.set(0);
        assert_eq!(heap.locate(&u32::MAX), None);
        assert_eq!(comparisons.get(), 1023);
    }
}
