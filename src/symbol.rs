//! Symbol alphabets and input preparation.
//!
//! Two alphabets are supported: raw bytes and Unicode scalar values. Byte mode
//! accepts any input; char mode requires the input to be valid UTF-8.

use std::fmt;

use crate::error::{Error, Result};

/// Alphabet used to split input into symbols
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SymbolMode {
    /// One symbol per input byte (alphabet of at most 256)
    #[default]
    Bytes = 0,
    /// One symbol per Unicode scalar value of UTF-8 input
    Chars = 1,
}

impl SymbolMode {
    /// Tag stored in the container header
    pub fn tag(&self) -> u8 {
        *self as u8
    }

    /// Parse a container header tag
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::Bytes),
            1 => Ok(Self::Chars),
            other => Err(Error::UnknownSymbolMode(other)),
        }
    }
}

/// An atomic unit of the encoded alphabet.
///
/// Symbols are compared only by equality and order; the order fixes the
/// insertion sequence of leaves into the Huffman priority queue.
pub trait Symbol: Ord + Clone + fmt::Debug {
    /// Alphabet this symbol type belongs to
    const MODE: SymbolMode;

    /// Append the container encoding of this symbol (little-endian)
    fn write_le(&self, out: &mut Vec<u8>);

    /// Read one container-encoded symbol from the front of `input`
    fn read_le(input: &mut &[u8]) -> Result<Self>;

    /// Append the symbol as it appeared in the original input
    fn write_raw(&self, out: &mut Vec<u8>);

    /// Printable label for code tables
    fn label(&self) -> String;
}

impl Symbol for u8 {
    const MODE: SymbolMode = SymbolMode::Bytes;

    fn write_le(&self, out: &mut Vec<u8>) {
        out.push(*self);
    }

    fn read_le(input: &mut &[u8]) -> Result<Self> {
        let [byte] = read_array::<1>(input)?;
        Ok(byte)
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        out.push(*self);
    }

    fn label(&self) -> String {
        if self.is_ascii_graphic() {
            format!("'{}'", *self as char)
        } else {
            format!("0x{:02x}", self)
        }
    }
}

impl Symbol for char {
    const MODE: SymbolMode = SymbolMode::Chars;

    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(*self as u32).to_le_bytes());
    }

    fn read_le(input: &mut &[u8]) -> Result<Self> {
        let value = u32::from_le_bytes(read_array::<4>(input)?);
        char::from_u32(value).ok_or(Error::InvalidSymbol(value))
    }

    fn write_raw(&self, out: &mut Vec<u8>) {
        let mut buf = [0u8; 4];
        out.extend_from_slice(self.encode_utf8(&mut buf).as_bytes());
    }

    fn label(&self) -> String {
        format!("{:?}", self)
    }
}

/// Input that has been validated and trimmed for a symbol mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolInput<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> SymbolInput<'a> {
    /// Validate `input` for `mode`, optionally trimming leading and trailing whitespace.
    ///
    /// Whitespace is the set [`is_space`] accepts. Byte mode trims its ASCII
    /// members only.
    pub fn new(input: &'a [u8], mode: SymbolMode, trim: bool) -> Result<Self> {
        match mode {
            SymbolMode::Bytes => {
                Ok(Self::Bytes(if trim { trim_ascii_whitespace(input) } else { input }))
            }
            SymbolMode::Chars => {
                let text = decode_utf8(input)?;
                Ok(Self::Text(if trim { text.trim_matches(is_space) } else { text }))
            }
        }
    }

    /// Length of the underlying input in bytes
    pub fn byte_len(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.len(),
            Self::Text(text) => text.len(),
        }
    }
}

/// Validate UTF-8, reporting the offset of the first invalid byte
pub fn decode_utf8(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input).map_err(|e| Error::InvalidUtf8 { offset: e.valid_up_to() })
}

/// Whitespace for trimming: Unicode `White_Space` plus the information
/// separators `U+001C..=U+001F`
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip leading and trailing ASCII bytes that [`is_space`] accepts
pub fn trim_ascii_whitespace(input: &[u8]) -> &[u8] {
    let space = |b: &u8| b.is_ascii() && is_space(*b as char);
    let start = input.iter().position(|b| !space(b)).unwrap_or(input.len());
    let end = input.iter().rposition(|b| !space(b)).map_or(start, |i| i + 1);
    &input[start..end]
}

/// Split `N` bytes off the front of `input`
pub(crate) fn read_array<const N: usize>(input: &mut &[u8]) -> Result<[u8; N]> {
    if input.len() < N {
        return Err(Error::UnexpectedEof);
    }
    let (head, rest) = input.split_at(N);
    let mut out = [0u8; N];
    out.copy_from_slice(head);
    *input = rest;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_ascii_whitespace() {
        assert_eq!(trim_ascii_whitespace(b"  abc \n"), b"abc");
        assert_eq!(trim_ascii_whitespace(b"abc"), b"abc");
        assert_eq!(trim_ascii_whitespace(b" \t\r\n "), b"");
        assert_eq!(trim_ascii_whitespace(b""), b"");
        assert_eq!(trim_ascii_whitespace(b" a b "), b"a b");
    }

    #[test]
    fn test_trim_vertical_tab_and_separators() {
        assert_eq!(trim_ascii_whitespace(b"aab\x0b"), b"aab");
        assert_eq!(trim_ascii_whitespace(b"\x1c\x1daab\x1e\x1f\x0c"), b"aab");
        // 0x85 and 0xa0 are not whitespace on their own in byte mode
        assert_eq!(trim_ascii_whitespace(b"\x85aab\xa0"), b"\x85aab\xa0");
    }

    #[test]
    fn test_is_space() {
        for c in ['\t', '\n', '\u{0b}', '\u{0c}', '\r', ' ', '\u{1c}', '\u{1f}', '\u{85}'] {
            assert!(is_space(c), "{:?}", c);
        }
        for c in ['\u{a0}', '\u{2028}', '\u{3000}'] {
            assert!(is_space(c), "{:?}", c);
        }
        for c in ['a', '\u{0}', '\u{1b}', '\u{7f}', '\u{200b}'] {
            assert!(!is_space(c), "{:?}", c);
        }
    }

    #[test]
    fn test_symbol_input_chars_trims_separators() {
        let input =
            SymbolInput::new("\u{1f}aab\u{0b}".as_bytes(), SymbolMode::Chars, true).unwrap();
        assert_eq!(input, SymbolInput::Text("aab"));
    }

    #[test]
    fn test_symbol_input_bytes_accepts_invalid_utf8() {
        let input = SymbolInput::new(&[0xff, 0xfe], SymbolMode::Bytes, false).unwrap();
        assert_eq!(input, SymbolInput::Bytes(&[0xff, 0xfe]));
    }

    #[test]
    fn test_symbol_input_chars_rejects_invalid_utf8() {
        let err = SymbolInput::new(b"ab\xffc", SymbolMode::Chars, false).unwrap_err();
        assert!(matches!(err, Error::InvalidUtf8 { offset: 2 }));
    }

    #[test]
    fn test_symbol_input_chars_trims_unicode_whitespace() {
        let input = SymbolInput::new("\u{3000}héllo\n".as_bytes(), SymbolMode::Chars, true)
            .unwrap();
        assert_eq!(input, SymbolInput::Text("héllo"));
        assert_eq!(input.byte_len(), 6);
    }

    #[test]
    fn test_mode_tags() {
        assert_eq!(SymbolMode::from_tag(SymbolMode::Bytes.tag()).unwrap(), SymbolMode::Bytes);
        assert_eq!(SymbolMode::from_tag(SymbolMode::Chars.tag()).unwrap(), SymbolMode::Chars);
        assert!(matches!(SymbolMode::from_tag(7), Err(Error::UnknownSymbolMode(7))));
    }

    #[test]
    fn test_char_container_encoding() {
        let mut out = Vec::new();
        'é'.write_le(&mut out);
        assert_eq!(out, vec![0xe9, 0x00, 0x00, 0x00]);

        let mut slice = out.as_slice();
        assert_eq!(char::read_le(&mut slice).unwrap(), 'é');
        assert!(slice.is_empty());
    }

    #[test]
    fn test_char_rejects_surrogate() {
        let bytes = 0xD800u32.to_le_bytes();
        let mut slice = &bytes[..];
        assert!(matches!(char::read_le(&mut slice), Err(Error::InvalidSymbol(0xD800))));
    }

    #[test]
    fn test_labels() {
        assert_eq!(b'a'.label(), "'a'");
        assert_eq!(b'\n'.label(), "0x0a");
        assert_eq!('\n'.label(), "'\\n'");
    }
}
