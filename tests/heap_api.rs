//! Scenario tests for the public PriorityHeap API.

use heapq::HeapError;
use heapq::PriorityHeap;
use heapq::compare::ByKey;
use heapq::compare::Reversed;
use heapq::config::BulkInsertPolicy;
use heapq::config::HeapConfig;
use heapq::NaturalOrder;

#[derive(Debug, Clone, PartialEq)]
struct Task {
    name: &'static str,
    priority: u32,
}

fn task(name: &'static str, priority: u32) -> Task {
    return Task { name, priority };
}

fn task_heap() -> PriorityHeap<Task, ByKey<fn(&Task) -> u32, u32>> {
    fn priority(task: &Task) -> u32 {
        return task.priority;
    }
    return PriorityHeap::with_comparator(ByKey::new(priority as fn(&Task) -> u32));
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn build_from_unordered_input() {
    let mut heap = PriorityHeap::from(vec![5, 3, 8, 1, 4]);
    let mut order = Vec::new();
    while let Ok(value) = heap.extract_min() {
        order.push(value);
    }
    assert_eq!(order, vec![1, 3, 4, 5, 8]);
}

#[test]
fn from_slice_copies_input() {
    let input = [7, 2, 9];
    let heap = PriorityHeap::from_slice_with(&input, NaturalOrder);
    assert_eq!(heap.len(), 3);
    assert_eq!(input, [7, 2, 9]);
    assert_eq!(heap.peek(), Ok(&2));
}

#[test]
fn default_heap_is_empty() {
    let heap: PriorityHeap<String> = PriorityHeap::default();
    assert!(heap.is_empty());
}

#[test]
fn build_does_not_bump_version() {
    let heap = PriorityHeap::from(vec![3, 2, 1]);
    assert_eq!(heap.version(), 0);
}

// =============================================================================
// Peek and extraction
// =============================================================================

#[test]
fn peek_is_idempotent() {
    let heap = PriorityHeap::from(vec![4, 2, 6]);
    let first = *heap.peek().unwrap();
    let second = *heap.peek().unwrap();
    assert_eq!(first, second);
    assert_eq!(heap.len(), 3);
}

#[test]
fn extract_from_empty_heap_fails() {
    let mut heap: PriorityHeap<u64> = PriorityHeap::new();
    let err = heap.extract_min().unwrap_err();
    assert_eq!(err, HeapError::EmptyContainer { operation: "extract_min" });
    assert_eq!(err.to_string(), "cannot extract_min on an empty heap");
}

#[test]
fn extraction_matches_sorted_list() {
    let mut heap = PriorityHeap::from(vec![9, 1, 8, 2, 7, 3, 6, 4, 5, 1, 9]);
    let expected = heap.to_sorted_list();
    let mut out = Vec::new();
    while let Some(value) = heap.pop() {
        out.push(value);
    }
    assert_eq!(out, expected);
}

#[test]
fn max_heap_via_reversed() {
    let mut heap = PriorityHeap::with_comparator(Reversed(NaturalOrder));
    heap.insert_all(vec!["pear", "apple", "zucchini"]);
    assert_eq!(heap.extract_min(), Ok("zucchini"));
}

// =============================================================================
// Equal priorities and removal
// =============================================================================

#[test]
fn equal_priority_peek_and_remove() {
    let mut heap = task_heap();
    heap.insert(task("a", 2));
    heap.insert(task("b", 1));
    heap.insert(task("c", 1));

    let top = heap.peek().unwrap();
    assert!(top.name == "b" || top.name == "c");
    assert_eq!(top.priority, 1);

    assert!(heap.remove(&task("b", 1)));
    let names: Vec<&str> = heap.to_sorted_list().iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["c", "a"]);
}

#[test]
fn remove_needs_full_equality() {
    let mut heap = task_heap();
    heap.insert(task("a", 1));
    // Same priority, different task.
    assert!(!heap.remove(&task("z", 1)));
    assert!(!heap.contains(&task("a", 2)));
    assert!(heap.contains(&task("a", 1)));
}

#[test]
fn remove_one_of_duplicates() {
    let mut heap = PriorityHeap::from(vec![2, 2, 2, 1]);
    assert!(heap.remove(&2));
    assert_eq!(heap.to_sorted_list(), vec![1, 2, 2]);
}

#[test]
fn remove_every_element_in_arbitrary_order() {
    let values: Vec<i32> = (0..200).map(|i| (i * 37) % 101).collect();
    let mut heap = PriorityHeap::from(values.clone());
    for value in values.iter().rev() {
        assert!(heap.remove(value));
        assert!(heap.check_invariant().is_ok());
    }
    assert!(heap.is_empty());
}

// =============================================================================
// Bulk operations
// =============================================================================

#[test]
fn insert_all_grows_by_batch_length() {
    for policy in [
        BulkInsertPolicy::Adaptive,
        BulkInsertPolicy::Heapify,
        BulkInsertPolicy::SiftUp,
    ] {
        let config = HeapConfig::default().with_bulk_insert(policy);
        let mut heap = PriorityHeap::with_config(NaturalOrder, config);
        heap.insert_all(0..100);
        heap.insert_all(vec![50, -1, 1000]);
        assert_eq!(heap.len(), 103);
        assert_eq!(heap.peek(), Ok(&-1));
        assert!(heap.check_invariant().is_ok());
    }
}

#[test]
fn remove_all_returns_contents_and_empties() {
    let mut heap = PriorityHeap::from(vec![3, 1, 2, 3]);
    let mut all = heap.remove_all();
    all.sort();
    assert_eq!(all, vec![1, 2, 3, 3]);
    assert_eq!(heap.len(), 0);
    assert!(heap.peek().is_err());
}

#[test]
fn clear_keeps_heap_usable() {
    let mut heap = PriorityHeap::from(vec![1, 2, 3]);
    heap.clear();
    assert!(heap.is_empty());
    heap.insert(10);
    heap.insert(5);
    assert_eq!(heap.extract_min(), Ok(5));
}

#[test]
fn ordered_set_is_sorted_and_distinct() {
    let heap = PriorityHeap::from(vec![4, 1, 4, 2, 1]);
    assert_eq!(heap.to_ordered_set(), vec![1, 2, 4]);
}

// =============================================================================
// Traversal guard
// =============================================================================

#[test]
fn insert_during_traversal_is_detected() {
    let mut heap = PriorityHeap::from(vec![3, 1, 2]);
    let mut cursor = heap.unordered_cursor();
    assert!(cursor.next(&heap).unwrap().is_ok());

    heap.insert(0);
    match cursor.next(&heap) {
        Some(Err(HeapError::ConcurrentModification { expected, found })) => {
            assert!(found > expected);
        }
        other => panic!("expected ConcurrentModification, got {:?}", other),
    }
    assert!(cursor.next(&heap).is_none());
}

#[test]
fn remove_during_traversal_is_detected() {
    let mut heap = PriorityHeap::from(vec![3, 1, 2]);
    let mut cursor = heap.unordered_cursor();
    cursor.next(&heap);
    heap.remove(&3);
    assert!(matches!(cursor.next(&heap), Some(Err(_))));
}

#[test]
fn failed_extract_does_not_invalidate_traversal() {
    let mut heap: PriorityHeap<i32> = PriorityHeap::new();
    let mut cursor = heap.unordered_cursor();
    assert!(heap.extract_min().is_err());
    assert!(cursor.next(&heap).is_none());
}

#[test]
fn fresh_cursor_after_mutation_works() {
    let mut heap = PriorityHeap::from(vec![2, 1]);
    heap.insert(0);
    let mut cursor = heap.unordered_cursor();
    let mut count = 0;
    while let Some(step) = cursor.next(&heap) {
        step.unwrap();
        count += 1;
    }
    assert_eq!(count, 3);
}
