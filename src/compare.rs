//! Comparison strategies for ordering heap elements.
//!
//! A heap is a min-heap with respect to its comparator: the element that
//! compares lowest has the highest priority and sits at the root.
//!
//! Any closure `Fn(&E, &E) -> Ordering` is a comparator. The named types here
//! cover the common cases without a closure:
//!
//! - `NaturalOrder`: the element's own `Ord`
//! - `ByKey`: order by a key extracted from each element
//! - `Reversed`: flip another comparator, turning a min-heap into a max-heap
//!
//! A comparator must be a total order, and it must agree with `PartialEq` on
//! the element type: equal elements compare as `Ordering::Equal`. Violating
//! this does not cause memory unsafety, but `contains` and `remove` may fail to
//! find an element that is present.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// A three-way comparison over elements of type `E`.
pub trait Comparator<E: ?Sized> {
    /// Compare two elements. `Less` means `a` has higher priority than `b`.
    fn compare(&self, a: &E, b: &E) -> Ordering;
}

impl<E: ?Sized, F> Comparator<E> for F
where
    F: Fn(&E, &E) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        return self(a, b);
    }
}

/// Orders elements by their `Ord` implementation, smallest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<E: Ord + ?Sized> Comparator<E> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        return a.cmp(b);
    }
}

/// Orders elements by a key, smallest key first.
///
/// ```
/// use heapq::compare::{ByKey, Comparator};
///
/// let by_len = ByKey::new(|s: &&str| s.len());
/// assert!(by_len.compare(&"ab", &"abc").is_lt());
/// ```
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    /// Create a comparator that orders by `key(element)`.
    pub fn new(key: F) -> ByKey<F, K> {
        return ByKey {
            key,
            _key: PhantomData,
        };
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        return ByKey::new(self.key.clone());
    }
}

impl<F, K> std::fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "ByKey<{}>", std::any::type_name::<K>());
    }
}

impl<E, F, K> Comparator<E> for ByKey<F, K>
where
    F: Fn(&E) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        return (self.key)(a).cmp(&(self.key)(b));
    }
}

/// Reverses another comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<E: ?Sized, C: Comparator<E>> Comparator<E> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        return self.0.compare(b, a);
    }
}
