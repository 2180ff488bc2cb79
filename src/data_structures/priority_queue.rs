use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(tentative distance, edge index)` candidates.
///
/// There is no decrease-key: an improved distance is pushed as a new entry and
/// the stale one is discarded by the caller when popped. That costs
/// O(m log m) over a full run instead of O(m log n) with an indexed heap.
/// Entries with equal distance pop in ascending edge index order.
#[derive(Debug)]
pub struct EdgeQueue<W>
where
    W: Float + Debug,
{
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, usize)>>,
}

impl<W> EdgeQueue<W>
where
    W: Float + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        EdgeQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        EdgeQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a candidate reaching the head of `edge` at `distance`
    pub fn push(&mut self, edge: usize, distance: W) {
        self.heap.push(Reverse((OrderedFloat(distance), edge)));
    }

    /// Removes the candidate with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap
            .pop()
            .map(|Reverse((distance, edge))| (edge, distance.into_inner()))
    }

    /// Returns the smallest candidate without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.heap
            .peek()
            .map(|Reverse((distance, edge))| (*edge, distance.into_inner()))
    }
}

impl<W> Default for EdgeQueue<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
