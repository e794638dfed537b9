use crate::error::{Error, Result};

/// Bit-level reader over an encoded payload
///
/// Mirrors [`BitWriter`](super::BitWriter): bits are read LSB to MSB within
/// each byte. Reading stops at `bit_len`, so padding in the final byte is never
/// mistaken for data.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Index of the next bit to read
    position: u64,
    /// Number of meaningful bits in `data`
    bit_len: u64,
}

impl<'a> BitReader<'a> {
    /// Reader over the first `bit_len` bits of `data`
    pub fn new(data: &'a [u8], bit_len: u64) -> Result<Self> {
        let available = data.len() as u64 * 8;
        if bit_len > available {
            return Err(Error::SizeMismatch { expected: bit_len, found: available });
        }
        Ok(Self { data, position: 0, bit_len })
    }

    /// Read a single bit
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.position >= self.bit_len {
            return Err(Error::UnexpectedEof);
        }
        let byte = self.data[(self.position / 8) as usize];
        let bit = (byte >> (self.position % 8)) & 1 == 1;
        self.position += 1;
        Ok(bit)
    }

    /// Bits consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Bits left before `bit_len`
    pub fn remaining(&self) -> u64 {
        self.bit_len - self.position
    }
}
