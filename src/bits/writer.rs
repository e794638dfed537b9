use crate::huffman::Code;

/// Bit-level writer for encoded payloads
///
/// Packs bits LSB-first within each byte. Codes are emitted most significant
/// bit first, so a decoder can walk the tree one bit at a time.
pub struct BitWriter {
    /// Accumulated output bytes
    output: Vec<u8>,
    /// Current byte being built
    current_byte: u8,
    /// Bits written to current byte (0-7)
    bits_in_byte: u8,
    /// Total bits written
    bit_len: u64,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity), current_byte: 0, bits_in_byte: 0, bit_len: 0 }
    }

    /// Write a single bit
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.current_byte |= (bit as u8) << self.bits_in_byte;
        self.bits_in_byte += 1;
        self.bit_len += 1;

        if self.bits_in_byte == 8 {
            self.output.push(self.current_byte);
            self.current_byte = 0;
            self.bits_in_byte = 0;
        }
    }

    /// Write a Huffman code, most significant bit first
    pub fn write_code(&mut self, code: Code) {
        for i in (0..code.length).rev() {
            self.write_bit((code.bits >> i) & 1 == 1);
        }
    }

    /// Number of bits written so far
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Pad the final partial byte with zero bits and return the output
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits_in_byte > 0 {
            self.output.push(self.current_byte);
        }
        self.output
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_bits_lsb_first() {
        let mut writer = BitWriter::new();
        for bit in [true, true, false, false, true, false, true, true] {
            writer.write_bit(bit);
        }
        assert_eq!(writer.bit_len(), 8);
        assert_eq!(writer.finish(), vec![0b1101_0011]);
    }

    #[test]
    fn test_write_code_msb_first() {
        let mut writer = BitWriter::new();
        writer.write_code(Code { bits: 0b110, length: 3 });
        // Emitted as 1, 1, 0 into bit positions 0, 1, 2
        assert_eq!(writer.finish(), vec![0b0000_0011]);
    }

    #[test]
    fn test_write_cross_byte() {
        let mut writer = BitWriter::new();
        writer.write_code(Code { bits: 0xFFF, length: 12 });
        assert_eq!(writer.bit_len(), 12);
        assert_eq!(writer.finish(), vec![0xFF, 0x0F]);
    }

    #[test]
    fn test_empty_finish() {
        let writer = BitWriter::default();
        assert_eq!(writer.bit_len(), 0);
        assert!(writer.finish().is_empty());
    }
}
