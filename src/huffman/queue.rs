use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::node::HuffmanNode;

/// Heap entry ordered by `(weight, seq)`.
///
/// `seq` is unique per push, so no two entries compare equal and the pop
/// order is fully determined by the push order.
struct QueueEntry<S> {
    weight: u64,
    seq: u64,
    node: HuffmanNode<S>,
}

impl<S> QueueEntry<S> {
    fn key(&self) -> (u64, u64) {
        (self.weight, self.seq)
    }
}

impl<S> PartialEq for QueueEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl<S> Eq for QueueEntry<S> {}
impl<S> PartialOrd for QueueEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<S> Ord for QueueEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-priority queue of Huffman nodes.
///
/// Lowest weight pops first; among equal weights the earlier push wins.
pub struct NodeQueue<S> {
    heap: BinaryHeap<Reverse<QueueEntry<S>>>,
    next_seq: u64,
}

impl<S> NodeQueue<S> {
    pub fn new() -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: BinaryHeap::with_capacity(capacity), next_seq: 0 }
    }

    pub fn push(&mut self, node: HuffmanNode<S>) {
        let entry = QueueEntry { weight: node.weight(), seq: self.next_seq, node };
        self.next_seq += 1;
        self.heap.push(Reverse(entry));
    }

    /// Remove the lowest-weight node
    pub fn pop(&mut self) -> Option<HuffmanNode<S>> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<S> Default for NodeQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}
