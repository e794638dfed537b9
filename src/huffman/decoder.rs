use super::node::HuffmanNode;
use crate::bits::BitReader;
use crate::error::Result;

/// Decoder that walks a Huffman tree one bit at a time
///
/// A 0 bit descends left and a 1 bit descends right, matching
/// [`Codebook`](super::Codebook). When the tree is a single leaf every symbol
/// occupies one bit, whose value is ignored.
pub struct TreeDecoder<'t, S> {
    root: &'t HuffmanNode<S>,
}

impl<'t, S: Clone> TreeDecoder<'t, S> {
    pub fn new(root: &'t HuffmanNode<S>) -> Self {
        Self { root }
    }

    /// Decode the next symbol from the bitstream
    pub fn decode(&self, bits: &mut BitReader<'_>) -> Result<S> {
        let mut node = self.root;
        if let HuffmanNode::Leaf { symbol, .. } = node {
            bits.read_bit()?;
            return Ok(symbol.clone());
        }

        loop {
            match node {
                HuffmanNode::Leaf { symbol, .. } => return Ok(symbol.clone()),
                HuffmanNode::Internal { left, right, .. } => {
                    node = if bits.read_bit()? { &**right } else { &**left };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitWriter;
    use crate::error::Error;
    use crate::frequency::count_frequencies;
    use crate::huffman::{build_tree, Codebook};

    #[test]
    fn test_decode_sequence() {
        let text = "aaabbc";
        let root = build_tree(&count_frequencies(text.chars())).unwrap();
        let book = Codebook::from_tree(&root).unwrap();

        let mut writer = BitWriter::new();
        for symbol in "cabba".chars() {
            writer.write_code(book.get(&symbol).unwrap());
        }
        let bit_len = writer.bit_len();
        let data = writer.finish();

        let decoder = TreeDecoder::new(&root);
        let mut reader = BitReader::new(&data, bit_len).unwrap();
        let decoded: String = (0..5).map(|_| decoder.decode(&mut reader).unwrap()).collect();
        assert_eq!(decoded, "cabba");
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_single_leaf_consumes_one_bit() {
        let root = HuffmanNode::leaf(b'z', 3);
        let decoder = TreeDecoder::new(&root);
        let data = [0u8];
        let mut reader = BitReader::new(&data, 3).unwrap();

        for _ in 0..3 {
            assert_eq!(decoder.decode(&mut reader).unwrap(), b'z');
        }
        assert!(matches!(decoder.decode(&mut reader), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_truncated_code() {
        let root = build_tree(&count_frequencies("aaabbc".chars())).unwrap();
        let decoder = TreeDecoder::new(&root);
        // A lone 1 bit stops halfway down to b or c
        let data = [0b1u8];
        let mut reader = BitReader::new(&data, 1).unwrap();
        assert!(matches!(decoder.decode(&mut reader), Err(Error::UnexpectedEof)));
    }
}
