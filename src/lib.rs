//! Heapq - an array-backed binary min-heap priority queue.
//!
//! # Quick Start
//!
//! ```
//! use heapq::PriorityHeap;
//!
//! // Build from an unordered collection in O(n)
//! let mut heap = PriorityHeap::from(vec![5, 3, 8, 1, 4]);
//!
//! // The lowest element has the highest priority
//! assert_eq!(heap.peek(), Ok(&1));
//!
//! // Arbitrary elements can be removed
//! assert!(heap.remove(&4));
//!
//! let mut order = Vec::new();
//! while let Ok(value) = heap.extract_min() {
//!     order.push(value);
//! }
//! assert_eq!(order, vec![1, 3, 5, 8]);
//! ```
//!
//! # Custom ordering
//!
//! ```
//! use heapq::PriorityHeap;
//! use heapq::compare::ByKey;
//!
//! let mut jobs = PriorityHeap::with_comparator(ByKey::new(|job: &(&str, u32)| job.1));
//! jobs.insert(("compile", 2));
//! jobs.insert(("fetch", 1));
//! assert_eq!(jobs.extract_min().map(|job| job.0), Ok("fetch"));
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod heap;
pub mod queue;

pub use compare::Comparator;
pub use compare::NaturalOrder;
pub use config::BulkInsertPolicy;
pub use config::HeapConfig;
pub use error::HeapError;
pub use heap::PriorityHeap;
pub use heap::UnorderedCursor;
pub use queue::PriorityQueue;
