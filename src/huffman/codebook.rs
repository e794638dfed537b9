use std::collections::btree_map::{self, BTreeMap};

use super::node::HuffmanNode;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Longest code a [`Code`] can hold
pub const MAX_CODE_LENGTH: usize = 64;

/// A prefix code: the low `length` bits of `bits`, most significant first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub length: u8,
}

impl Code {
    /// Render as a string of '0' and '1'
    pub fn to_bit_string(&self) -> String {
        (0..self.length).rev().map(|i| if (self.bits >> i) & 1 == 1 { '1' } else { '0' }).collect()
    }
}

/// Per-symbol codes read off a Huffman tree (left edge = 0, right edge = 1)
#[derive(Clone, Debug)]
pub struct Codebook<S> {
    codes: BTreeMap<S, Code>,
}

impl<S: Ord + Clone> Codebook<S> {
    /// Assign codes by walking the tree.
    ///
    /// A tree that is a single leaf gets the 1-bit code `0` so that every
    /// symbol still occupies at least one bit in an encoded stream.
    pub fn from_tree(root: &HuffmanNode<S>) -> Result<Self> {
        let mut codes = BTreeMap::new();
        match root {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(symbol.clone(), Code { bits: 0, length: 1 });
            }
            HuffmanNode::Internal { .. } => assign_codes(root, 0, 0, &mut codes)?,
        }
        Ok(Self { codes })
    }

    pub fn get(&self, symbol: &S) -> Option<Code> {
        self.codes.get(symbol).copied()
    }

    /// Number of symbols with a code
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in ascending symbol order
    pub fn iter(&self) -> btree_map::Iter<'_, S, Code> {
        self.codes.iter()
    }

    /// Bits needed to encode every symbol counted in `frequencies`.
    ///
    /// Symbols without a code contribute nothing.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable<S>) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, &count)| self.get(symbol).map(|c| count * c.length as u64))
            .sum()
    }
}

fn assign_codes<S: Ord + Clone>(
    node: &HuffmanNode<S>,
    bits: u64,
    length: usize,
    out: &mut BTreeMap<S, Code>,
) -> Result<()> {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            out.insert(symbol.clone(), Code { bits, length: length as u8 });
        }
        HuffmanNode::Internal { left, right, .. } => {
            if length >= MAX_CODE_LENGTH {
                return Err(Error::CodeTooLong { length: length + 1 });
            }
            assign_codes(left, bits << 1, length + 1, out)?;
            assign_codes(right, (bits << 1) | 1, length + 1, out)?;
        }
    }
    Ok(())
}
