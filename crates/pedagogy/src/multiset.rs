//! Order-insensitive comparison of element collections.
//!
//! Heaps return elements in an unspecified order from `remove_all` and
//! unordered traversal, so tests compare what came out as a multiset.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A bag of elements with multiplicities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Multiset<T: Eq + Hash> {
    counts: FxHashMap<T, usize>,
    len: usize,
}

impl<T: Eq + Hash> Multiset<T> {
    pub fn new() -> Multiset<T> {
        return Multiset {
            counts: FxHashMap::default(),
            len: 0,
        };
    }

    /// Add one occurrence of `item`.
    pub fn add(&mut self, item: T) {
        *self.counts.entry(item).or_insert(0) += 1;
        self.len += 1;
    }

    /// Remove one occurrence of `item`. Returns false if it was absent.
    pub fn remove_one(&mut self, item: &T) -> bool {
        let Some(count) = self.counts.get_mut(item) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(item);
        }
        self.len -= 1;
        return true;
    }

    /// Occurrences of `item`.
    pub fn count(&self, item: &T) -> usize {
        return *self.counts.get(item).unwrap_or(&0);
    }

    /// Total number of occurrences.
    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Number of distinct elements.
    pub fn distinct(&self) -> usize {
        return self.counts.len();
    }
}

impl<T: Eq + Hash> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Multiset::new();
        for item in iter {
            set.add(item);
        }
        return set;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_does_not_matter() {
        let a: Multiset<i32> = vec![1, 2, 2, 3].into_iter().collect();
        let b: Multiset<i32> = vec![2, 3, 1, 2].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn multiplicity_matters() {
        let a: Multiset<i32> = vec![1, 2, 2].into_iter().collect();
        let b: Multiset<i32> = vec![1, 2].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a.count(&2), 2);
        assert_eq!(a.distinct(), 2);
    }

    #[test]
    fn remove_one_decrements() {
        let mut set: Multiset<&str> = vec!["x", "x", "y"].into_iter().collect();
        assert!(set.remove_one(&"x"));
        assert_eq!(set.count(&"x"), 1);
        assert!(set.remove_one(&"x"));
        assert!(!set.remove_one(&"x"));
        assert_eq!(set.len(), 1);
    }
}
