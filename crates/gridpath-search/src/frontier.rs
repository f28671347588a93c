//! Min-priority frontier with stable tie-breaking.

use std::collections::BinaryHeap;

use gridpath_core::Point;

/// An entry in the open list: a position queued at a given cost.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) cost: i32,
    pub(crate) seq: u64,
    pub(crate) pos: Point,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest cost first;
        // on equal cost the lowest sequence number wins (insertion order).
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A binary-heap frontier for Dijkstra and A*.
///
/// Equal-cost entries pop in insertion order. The tie-break is part of the
/// engine's contract: it makes priority searches reproducible instead of
/// depending on heap internals.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<OpenEntry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, cost: i32, pos: Point) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(OpenEntry { cost, seq, pos });
    }

    pub(crate) fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }
}
