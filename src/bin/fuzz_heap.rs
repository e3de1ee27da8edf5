//! AFL fuzz harness for PriorityHeap
//!
//! Each input is decoded into a sequence of heap operations that are applied
//! both to a `PriorityHeap` and to a sorted `Vec` model. After every
//! operation the harness checks:
//! 1. The heap property holds for every parent/child pair
//! 2. Length and the minimum agree with the model
//! 3. Every result (extracted value, remove/contains answers) agrees

use afl::fuzz;
use heapq::BulkInsertPolicy;
use heapq::HeapConfig;
use heapq::HeapError;
use heapq::NaturalOrder;
use heapq::PriorityHeap;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone)]
enum FuzzOp {
    Insert(u8),
    /// Values are small so that duplicates are common
    InsertAll(Vec<u8>),
    ExtractMin,
    Remove(u8),
    Contains(u8),
    Clear,
    RemoveAll,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 7;
        let rest = &bytes[1..];

        match op_type {
            0 if !rest.is_empty() => Some((FuzzOp::Insert(rest[0] % 64), &rest[1..])),
            1 if !rest.is_empty() => {
                let count = (rest[0] % 32) as usize;
                let available = rest.len() - 1;
                let take = count.min(available);
                let values = rest[1..1 + take].iter().map(|b| b % 64).collect();
                Some((FuzzOp::InsertAll(values), &rest[1 + take..]))
            }
            2 => Some((FuzzOp::ExtractMin, rest)),
            3 if !rest.is_empty() => Some((FuzzOp::Remove(rest[0] % 64), &rest[1..])),
            4 if !rest.is_empty() => Some((FuzzOp::Contains(rest[0] % 64), &rest[1..])),
            5 => Some((FuzzOp::Clear, rest)),
            6 => Some((FuzzOp::RemoveAll, rest)),
            _ => None,
        }
    }
}

fn check(heap: &PriorityHeap<u8>, model: &[u8]) {
    if let Err((parent, child)) = heap.check_invariant() {
        panic!("Heap property broken between {} and {}: {:?}", parent, child, heap);
    }
    assert_eq!(heap.len(), model.len(), "Length mismatch");
    assert_eq!(heap.first(), model.first(), "Minimum mismatch");
}

fn main() {
    fuzz!(|data: &[u8]| {
        // The first byte picks the batch policy so every strategy gets coverage.
        let Some((&policy_byte, mut remaining)) = data.split_first() else {
            return;
        };
        let policy = match policy_byte % 3 {
            0 => BulkInsertPolicy::Adaptive,
            1 => BulkInsertPolicy::Heapify,
            _ => BulkInsertPolicy::SiftUp,
        };
        let config = HeapConfig::default().with_bulk_insert(policy);
        let mut heap = PriorityHeap::with_config(NaturalOrder, config);
        let mut model: Vec<u8> = Vec::new();

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert(value) => {
                    heap.insert(value);
                    let at = model.partition_point(|v| *v <= value);
                    model.insert(at, value);
                }

                FuzzOp::InsertAll(values) => {
                    heap.insert_all(values.iter().copied());
                    model.extend(values);
                    model.sort();
                }

                FuzzOp::ExtractMin => {
                    let result = heap.extract_min();
                    if model.is_empty() {
                        assert_eq!(result, Err(HeapError::EmptyContainer { operation: "extract_min" }));
                    } else {
                        assert_eq!(result, Ok(model.remove(0)), "Extracted wrong element");
                    }
                }

                FuzzOp::Remove(value) => {
                    let expected = match model.iter().position(|v| *v == value) {
                        Some(at) => {
                            model.remove(at);
                            true
                        }
                        None => false,
                    };
                    assert_eq!(heap.remove(&value), expected, "Remove disagreement for {}", value);
                }

                FuzzOp::Contains(value) => {
                    assert_eq!(heap.contains(&value), model.contains(&value));
                }

                FuzzOp::Clear => {
                    heap.clear();
                    model.clear();
                }

                FuzzOp::RemoveAll => {
                    let mut all = heap.remove_all();
                    all.sort();
                    assert_eq!(all, model, "remove_all returned wrong contents");
                    model.clear();
                }
            }

            check(&heap, &model);
        }

        // Final drain must come out sorted
        assert_eq!(heap.to_sorted_list(), model);
        let drained: Vec<u8> = heap.into_sorted_iter().collect();
        assert_eq!(drained, model, "Drain order mismatch");
    });
}
