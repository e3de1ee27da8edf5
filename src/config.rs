//! Tuning knobs for heap construction and batch insertion.

/// How `insert_all` restores the heap property after appending a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BulkInsertPolicy {
    /// Pick whichever strategy is estimated to be cheaper for this batch.
    #[default]
    Adaptive,
    /// Always rebuild the whole heap bottom-up.
    Heapify,
    /// Always sift each new element up individually.
    SiftUp,
}

/// The strategy chosen for a single batch insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkStrategy {
    Heapify,
    SiftUp,
}

impl BulkInsertPolicy {
    /// Decide how to absorb `added` new elements into a heap that held
    /// `existing` elements before the batch.
    ///
    /// A bottom-up rebuild costs about `2 * new_len` comparisons, while
    /// sifting each element up costs about `added * log2(existing)`. An
    /// empty heap always rebuilds.
    pub fn choose(&self, existing: usize, added: usize) -> BulkStrategy {
        match self {
            BulkInsertPolicy::Heapify => return BulkStrategy::Heapify,
            BulkInsertPolicy::SiftUp => return BulkStrategy::SiftUp,
            BulkInsertPolicy::Adaptive => {}
        }

        if existing == 0 {
            return BulkStrategy::Heapify;
        }

        let new_len = existing.saturating_add(added);
        let sift_cost = added.saturating_mul(existing.ilog2() as usize);
        if sift_cost >= new_len.saturating_mul(2) {
            return BulkStrategy::Heapify;
        }
        return BulkStrategy::SiftUp;
    }
}

/// Construction-time settings for a heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeapConfig {
    /// Strategy used by `insert_all`, `extend`, and `append`.
    pub bulk_insert: BulkInsertPolicy,
    /// Number of elements to reserve space for up front.
    pub initial_capacity: usize,
}

impl HeapConfig {
    pub fn with_bulk_insert(mut self, policy: BulkInsertPolicy) -> HeapConfig {
        self.bulk_insert = policy;
        return self;
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> HeapConfig {
        self.initial_capacity = capacity;
        return self;
    }
}
