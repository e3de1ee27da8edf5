//! Educational priority queue implementations.
//!
//! This crate provides deliberately simple priority queues that implement
//! `heapq::PriorityQueue`. They are designed for:
//!
//! - Learning what a binary heap buys over the obvious approaches
//! - Serving as reference models in conformance and property tests
//! - Giving the benchmarks a baseline to compare against
//!
//! # Implementations
//!
//! | Implementation | Storage | insert | extract_min | remove |
//! |----------------|---------|--------|-------------|--------|
//! | `SortedVecQueue` | Sorted `Vec` | O(n) | O(n) | O(n) |
//! | `LinearScanQueue` | Unsorted `Vec` | O(1) | O(n) | O(n) |
//!
//! # Example
//!
//! ```
//! use heapq::PriorityQueue;
//! use pedagogy::sorted_vec::SortedVecQueue;
//!
//! let mut queue = SortedVecQueue::new();
//! queue.insert(3);
//! queue.insert(1);
//! assert_eq!(queue.extract_min(), Ok(1));
//! ```

pub mod linear_scan;
pub mod multiset;
pub mod sorted_vec;

pub use linear_scan::LinearScanQueue;
pub use multiset::Multiset;
pub use sorted_vec::SortedVecQueue;
