//! Self-describing container for Huffman-encoded data.
//!
//! Layout (integers little-endian):
//!
//! ```text
//! magic "HUFL" | version u8 | symbol mode u8 | entry count u32
//! entries: symbol (u8, or u32 scalar value) | count u64
//! symbol count u64 | payload bits u64 | CRC32 of original input u32
//! payload
//! ```
//!
//! The decoder rebuilds the tree from the stored counts, so encoder and decoder
//! always agree on the tree shape.

use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::frequency::{count_frequencies, FrequencyTable};
use crate::huffman::{build_tree, Codebook, TreeDecoder};
use crate::symbol::{decode_utf8, read_array, Symbol, SymbolMode};

pub const MAGIC: [u8; 4] = *b"HUFL";
pub const VERSION: u8 = 1;

/// Encode `input` into a container.
///
/// In char mode `input` must be valid UTF-8. Empty input encodes to a header
/// with no entries and no payload.
pub fn encode(input: &[u8], mode: SymbolMode) -> Result<Vec<u8>> {
    match mode {
        SymbolMode::Bytes => {
            encode_symbols(input, input.iter().copied(), &FrequencyTable::from_bytes(input))
        }
        SymbolMode::Chars => {
            let text = decode_utf8(input)?;
            encode_symbols(input, text.chars(), &count_frequencies(text.chars()))
        }
    }
}

fn encode_symbols<S, I>(input: &[u8], symbols: I, table: &FrequencyTable<S>) -> Result<Vec<u8>>
where
    S: Symbol,
    I: Iterator<Item = S>,
{
    let mut out = Vec::with_capacity(input.len() / 2 + 64);
    out.extend_from_slice(&MAGIC);
    out.push(VERSION);
    out.push(S::MODE.tag());
    out.extend_from_slice(&(table.len() as u32).to_le_bytes());
    for (symbol, &count) in table {
        symbol.write_le(&mut out);
        out.extend_from_slice(&count.to_le_bytes());
    }
    out.extend_from_slice(&table.total().to_le_bytes());

    let mut writer = BitWriter::with_capacity(input.len() / 2);
    if !table.is_empty() {
        let root = build_tree(table)?;
        let book = Codebook::from_tree(&root)?;
        for symbol in symbols {
            let code = book
                .get(&symbol)
                .ok_or_else(|| Error::Internal(format!("no code for symbol {:?}", symbol)))?;
            writer.write_code(code);
        }
    }

    out.extend_from_slice(&writer.bit_len().to_le_bytes());
    out.extend_from_slice(&crc32fast::hash(input).to_le_bytes());
    out.extend_from_slice(&writer.finish());
    Ok(out)
}

/// Decode a container produced by [`encode`], verifying its checksum
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let mut input = data;

    let magic = read_array::<4>(&mut input)?;
    if magic != MAGIC {
        return Err(Error::InvalidMagic(magic));
    }
    let [version] = read_array::<1>(&mut input)?;
    if version != VERSION {
        return Err(Error::UnsupportedVersion(version));
    }
    let [mode] = read_array::<1>(&mut input)?;

    match SymbolMode::from_tag(mode)? {
        SymbolMode::Bytes => decode_symbols::<u8>(input),
        SymbolMode::Chars => decode_symbols::<char>(input),
    }
}

fn decode_symbols<S: Symbol>(mut input: &[u8]) -> Result<Vec<u8>> {
    let entries = u32::from_le_bytes(read_array(&mut input)?);
    let mut table = FrequencyTable::new();
    let mut total = 0u64;
    for _ in 0..entries {
        let symbol = S::read_le(&mut input)?;
        let count = u64::from_le_bytes(read_array(&mut input)?);
        total = total.checked_add(count).ok_or(Error::CountOverflow)?;
        table.insert(symbol, count);
    }

    let symbol_count = u64::from_le_bytes(read_array(&mut input)?);
    let bit_len = u64::from_le_bytes(read_array(&mut input)?);
    let expected_crc = u32::from_le_bytes(read_array(&mut input)?);

    if total != symbol_count {
        return Err(Error::SizeMismatch { expected: symbol_count, found: total });
    }
    let payload_bytes = bit_len.div_ceil(8);
    if payload_bytes != input.len() as u64 {
        return Err(Error::SizeMismatch { expected: payload_bytes, found: input.len() as u64 });
    }

    let mut out = Vec::new();
    if symbol_count > 0 {
        let root = build_tree(&table)?;
        let decoder = TreeDecoder::new(&root);
        let mut reader = BitReader::new(input, bit_len)?;
        for _ in 0..symbol_count {
            decoder.decode(&mut reader)?.write_raw(&mut out);
        }
        if reader.remaining() != 0 {
            return Err(Error::SizeMismatch { expected: bit_len, found: reader.position() });
        }
    }

    let found = crc32fast::hash(&out);
    if found != expected_crc {
        return Err(Error::Crc32Mismatch { expected: expected_crc, found });
    }
    Ok(out)
}

/// Payload size in bits recorded in a container header, without decoding it
pub fn payload_bits(data: &[u8]) -> Result<u64> {
    let mut input = data;
    let magic = read_array::<4>(&mut input)?;
    if magic != MAGIC {
        return Err(Error::InvalidMagic(magic));
    }
    let [version] = read_array::<1>(&mut input)?;
    if version != VERSION {
        return Err(Error::UnsupportedVersion(version));
    }
    let symbol_width = match SymbolMode::from_tag(read_array::<1>(&mut input)?[0])? {
        SymbolMode::Bytes => 1,
        SymbolMode::Chars => 4,
    };

    let entries = u32::from_le_bytes(read_array(&mut input)?) as usize;
    let skip = entries.checked_mul(symbol_width + 8).ok_or(Error::UnexpectedEof)? + 8;
    if input.len() < skip {
        return Err(Error::UnexpectedEof);
    }
    input = &input[skip..];
    Ok(u64::from_le_bytes(read_array(&mut input)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::{encoding_length, encoding_length_with, SingleSymbolDepth};

    fn roundtrip(input: &[u8], mode: SymbolMode) -> Vec<u8> {
        let encoded = encode(input, mode).unwrap();
        decode(&encoded).unwrap()
    }

    #[test]
    fn test_roundtrip_bytes() {
        let data = b"abracadabra, the quick brown fox".to_vec();
        assert_eq!(roundtrip(&data, SymbolMode::Bytes), data);
    }

    #[test]
    fn test_roundtrip_chars() {
        let text = "naïve café, ünïcødé ✓✓✓";
        assert_eq!(roundtrip(text.as_bytes(), SymbolMode::Chars), text.as_bytes());
    }

    #[test]
    fn test_roundtrip_empty() {
        let encoded = encode(b"", SymbolMode::Bytes).unwrap();
        // magic, version, mode, entries, symbol count, bits, crc
        assert_eq!(encoded.len(), 4 + 1 + 1 + 4 + 8 + 8 + 4);
        assert!(decode(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_roundtrip_single_symbol() {
        let encoded = encode(b"aaaa", SymbolMode::Bytes).unwrap();
        let root = build_tree(&FrequencyTable::from_bytes(b"aaaa")).unwrap();
        let expected = encoding_length_with(&root, SingleSymbolDepth::One);
        assert_eq!(payload_bits(&encoded).unwrap(), expected);
        assert_eq!(decode(&encoded).unwrap(), b"aaaa");
    }

    #[test]
    fn test_payload_bits_equal_encoding_length() {
        let data = b"aaabbc";
        let encoded = encode(data, SymbolMode::Bytes).unwrap();
        let root = build_tree(&FrequencyTable::from_bytes(data)).unwrap();
        assert_eq!(payload_bits(&encoded).unwrap(), encoding_length(&root));
        assert_eq!(payload_bits(&encoded).unwrap(), 9);
    }

    #[test]
    fn test_payload_bits_chars_header() {
        let encoded = encode("ééa".as_bytes(), SymbolMode::Chars).unwrap();
        assert_eq!(payload_bits(&encoded).unwrap(), 3);
    }

    #[test]
    fn test_chars_mode_rejects_invalid_utf8() {
        assert!(matches!(
            encode(b"ok\xc3", SymbolMode::Chars),
            Err(Error::InvalidUtf8 { offset: 2 })
        ));
    }

    #[test]
    fn test_bad_magic() {
        let mut encoded = encode(b"hello", SymbolMode::Bytes).unwrap();
        encoded[0] = b'X';
        assert!(matches!(decode(&encoded), Err(Error::InvalidMagic(_))));
    }

    #[test]
    fn test_bad_version() {
        let mut encoded = encode(b"hello", SymbolMode::Bytes).unwrap();
        encoded[4] = 9;
        assert!(matches!(decode(&encoded), Err(Error::UnsupportedVersion(9))));
    }

    #[test]
    fn test_bad_mode() {
        let mut encoded = encode(b"hello", SymbolMode::Bytes).unwrap();
        encoded[5] = 3;
        assert!(matches!(decode(&encoded), Err(Error::UnknownSymbolMode(3))));
    }

    #[test]
    fn test_truncated() {
        let encoded = encode(b"hello world", SymbolMode::Bytes).unwrap();
        assert!(decode(&encoded[..encoded.len() - 1]).is_err());
        assert!(matches!(decode(&encoded[..8]), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_corrupted_payload() {
        let mut encoded = encode(b"hello world, hello world", SymbolMode::Bytes).unwrap();
        let last = encoded.len() - 1;
        encoded[last] ^= 0x01;
        // Either the bits no longer line up or the checksum catches it
        assert!(decode(&encoded).is_err());
    }

    #[test]
    fn test_corrupted_checksum() {
        let data = b"checksum";
        let mut encoded = encode(data, SymbolMode::Bytes).unwrap();
        // CRC sits after the header entries, symbol count and bit length
        let crc_offset = 4 + 1 + 1 + 4 + FrequencyTable::from_bytes(data).len() * 9 + 8 + 8;
        encoded[crc_offset] ^= 0xFF;
        assert!(matches!(decode(&encoded), Err(Error::Crc32Mismatch { .. })));
    }

    #[test]
    fn test_count_overflow() {
        let mut data = Vec::new();
        data.extend_from_slice(&MAGIC);
        data.push(VERSION);
        data.push(SymbolMode::Bytes.tag());
        data.extend_from_slice(&2u32.to_le_bytes());
        for symbol in [b'a', b'b'] {
            data.push(symbol);
            data.extend_from_slice(&u64::MAX.to_le_bytes());
        }
        assert!(matches!(decode(&data), Err(Error::CountOverflow)));
    }
}
