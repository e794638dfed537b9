use std::collections::BTreeMap;

use super::node::HuffmanNode;

/// Depth charged to the symbol of a tree that is a single leaf
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SingleSymbolDepth {
    /// The root leaf sits at depth 0, so the input costs 0 bits
    #[default]
    Zero,
    /// Give the lone symbol a 1-bit code, as practical coders do
    One,
}

/// Total encoded size in bits: the sum of `weight × depth` over all leaves.
///
/// The root is at depth 0, so a tree that is a single leaf yields 0.
pub fn encoding_length<S>(root: &HuffmanNode<S>) -> u64 {
    encoding_length_with(root, SingleSymbolDepth::Zero)
}

/// [`encoding_length`] with an explicit convention for single-symbol trees
pub fn encoding_length_with<S>(root: &HuffmanNode<S>, single: SingleSymbolDepth) -> u64 {
    match (root, single) {
        (HuffmanNode::Leaf { weight, .. }, SingleSymbolDepth::One) => *weight,
        _ => weighted_depth(root, 0),
    }
}

fn weighted_depth<S>(node: &HuffmanNode<S>, depth: u64) -> u64 {
    match node {
        HuffmanNode::Leaf { weight, .. } => weight * depth,
        HuffmanNode::Internal { left, right, .. } => {
            weighted_depth(left, depth + 1) + weighted_depth(right, depth + 1)
        }
    }
}

/// Code length (leaf depth) of every symbol in the tree
pub fn code_lengths<S: Ord + Clone>(
    root: &HuffmanNode<S>,
    single: SingleSymbolDepth,
) -> BTreeMap<S, u32> {
    let mut lengths = BTreeMap::new();
    match (root, single) {
        (HuffmanNode::Leaf { symbol, .. }, SingleSymbolDepth::One) => {
            lengths.insert(symbol.clone(), 1);
        }
        _ => collect_depths(root, 0, &mut lengths),
    }
    lengths
}

fn collect_depths<S: Ord + Clone>(node: &HuffmanNode<S>, depth: u32, out: &mut BTreeMap<S, u32>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            out.insert(symbol.clone(), depth);
        }
        HuffmanNode::Internal { left, right, .. } => {
            collect_depths(left, depth + 1, out);
            collect_depths(right, depth + 1, out);
        }
    }
}
