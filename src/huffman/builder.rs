use super::node::HuffmanNode;
use super::queue::NodeQueue;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Build a Huffman tree by repeatedly merging the two lightest nodes.
///
/// Leaves enter the queue in ascending symbol order. Ties on weight go to the
/// node pushed first, and the first node popped becomes the left child, so the
/// tree shape is a pure function of the table.
///
/// A table with one distinct symbol yields that lone leaf as the root.
/// An empty table fails with [`Error::EmptyAlphabet`].
pub fn build_tree<S: Ord + Clone>(frequencies: &FrequencyTable<S>) -> Result<HuffmanNode<S>> {
    let mut queue = NodeQueue::with_capacity(frequencies.len());
    for (symbol, &count) in frequencies {
        queue.push(HuffmanNode::leaf(symbol.clone(), count));
    }

    loop {
        let left = queue.pop().ok_or(Error::EmptyAlphabet)?;
        match queue.pop() {
            None => return Ok(left),
            Some(right) => queue.push(HuffmanNode::merge(left, right)),
        }
    }
}
